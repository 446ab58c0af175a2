use crate::conf::LogTailConfig;
use crate::server::gateway::LogTailGateway;
use anyhow::{Context, Error, Result};
use pingora::prelude::*;
use pingora::server::Server;
use pingora::server::configuration::ServerConf;
use std::sync::Arc;

/// Run the Pingora server with the given configuration.
pub fn run(config: LogTailConfig) -> Result<()> {
    let server = build_pingora_server(&config)?;

    tracing::info!(
        listen = %config.server.listen,
        route = %config.tail.route,
        path = %config.tail.path.display(),
        redact = config.tail.redact.is_some(),
        "logtail server starting"
    );

    server.run_forever();
}

/// Build the Pingora server.
pub fn build_pingora_server(config: &LogTailConfig) -> Result<Server, Error> {
    let mut server = if let Some(threads) = config.server.threads {
        tracing::debug!(
            threads,
            "Creating Pingora server with overridden worker threads"
        );
        let mut conf = ServerConf::new().context("could not construct pingora server configuration")?;
        conf.threads = threads;
        Server::new_with_opt_and_conf(None, conf)
    } else {
        // "None" is required here to truly tell Pingora to use its default settings.
        Server::new(None)?
    };

    server.bootstrap();

    let tail = config.build_tail()?;
    let gateway = LogTailGateway::new(config.tail.route.clone(), Arc::new(tail));

    let mut svc = http_proxy_service(&server.configuration, gateway);
    svc.add_tcp(&config.server.listen);

    server.add_service(svc);

    Ok(server)
}
