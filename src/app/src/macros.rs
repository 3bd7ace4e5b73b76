/// Macro for model field updates with automatic rendering.
/// Renders only when at least one field actually changed.
///
/// # Examples
///
/// Single field update:
/// ```ignore
/// update_field!(model.config.form.name, name)
/// ```
///
/// Multiple field updates:
/// ```ignore
/// update_field!(
///     model.config.form.wifi_ssid, ssid;
///     model.wifi.password.disabled, false
/// )
/// ```
#[macro_export]
macro_rules! update_field {
    // Multiple field updates (must come first to match the pattern)
    ($($model_field:expr, $value:expr);+ $(;)?) => {{
        let mut changed = false;
        $(
            let value = $value;
            if $model_field != value {
                $model_field = value;
                changed = true;
            }
        )+
        if changed {
            crux_core::render::render()
        } else {
            crux_core::Command::done()
        }
    }};

    // Single field update
    ($model_field:expr, $value:expr) => {{
        update_field!($model_field, $value;)
    }};
}

/// Macro for device GET requests.
/// The response is reduced to a `RawResponse` and wrapped into the domain event.
///
/// # Example
/// ```ignore
/// http_get!(Status, StatusEvent, "/api/status", Response)
/// ```
#[macro_export]
macro_rules! http_get {
    ($domain:ident, $domain_event:ident, $endpoint:expr, $response_event:ident) => {
        $crate::HttpCmd::get($crate::build_url($endpoint))
            .build()
            .then_send(|result| {
                $crate::events::Event::$domain($crate::events::$domain_event::$response_event(
                    $crate::into_raw(result),
                ))
            })
    };
}

/// Macro for re-arming a polling loop.
///
/// # Example
/// ```ignore
/// schedule_tick!(Status, StatusEvent, STATUS_POLL_MS)
/// ```
#[macro_export]
macro_rules! schedule_tick {
    ($domain:ident, $domain_event:ident, $millis:expr) => {
        $crate::TimerCmd::sleep($millis)
            .build()
            .then_send(|_| $crate::events::Event::$domain($crate::events::$domain_event::Tick))
    };
}
