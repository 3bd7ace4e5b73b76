use crate::{api::Api, device::DeviceService};
use actix_cors::Cors;
use actix_files::Files;
use actix_web::{App, HttpServer, dev::Server, web::Data};
use anyhow::{Context, Result};
use log::info;
use std::{net::SocketAddr, path::PathBuf};

/// Bind the device API, optionally serving the dashboard from `webroot`
///
/// Returns the not yet started server and the addresses it is bound to.
pub fn bind<Device>(
    api: Api<Device>,
    addr: SocketAddr,
    webroot: Option<PathBuf>,
) -> Result<(Server, Vec<SocketAddr>)>
where
    Device: DeviceService + Clone + Send + 'static,
{
    if let Some(webroot) = &webroot {
        info!("serving dashboard from {}", webroot.display());
    }

    let server = HttpServer::new(move || {
        let app = App::new()
            .wrap(
                Cors::default()
                    .allow_any_origin()
                    .allow_any_header()
                    .allowed_methods(vec!["GET", "POST"])
                    .max_age(3600),
            )
            .app_data(Data::new(api.clone()))
            .configure(Api::<Device>::configure);

        match &webroot {
            Some(webroot) => app.service(Files::new("/", webroot).index_file("index.html")),
            None => app,
        }
    })
    .bind(addr)
    .with_context(|| format!("failed to bind server to {addr}"))?;

    let addrs = server.addrs();
    info!("listening on {addrs:?}");

    Ok((server.disable_signals().run(), addrs))
}
