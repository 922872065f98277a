#![recursion_limit = "256"]

#[cfg(feature = "ssr")]
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    use anyhow::Context;
    use axum::Router;
    use axum_tracing_opentelemetry::middleware::{OtelAxumLayer, OtelInResponseLayer};
    use leptos::prelude::*;
    use leptos_axum::{generate_route_list, LeptosRoutes};
    use opentelemetry_configuration::OtelSdkBuilder;
    use project_board::app::*;
    use project_board::config::Config;
    use project_board::db;
    use project_board::error::AppError;
    use project_board::proxy_headers::ForwardedHeadersLayer;
    use tower_http::compression::CompressionLayer;

    let _guard = OtelSdkBuilder::new()
        .service_name(env!("CARGO_PKG_NAME"))
        .service_version(env!("CARGO_PKG_VERSION"))
        .resource_attribute("vcs.ref.head.revision", env!("VCS_REF_HEAD_REVISION"))
        .resource_attribute("vcs.ref.head.name", env!("VCS_REF_HEAD_NAME"))
        .resource_attribute("vcs.ref.head.type", "branch")
        .endpoint("http://127.0.0.1:4318")
        .with_standard_env()
        .build()
        .context("failed to initialise OpenTelemetry")?;

    let config = Config::load().map_err(AppError::from)?;

    let pool = db::init_pool(config.database.as_ref()).await?;
    db::run_migrations(&pool).await?;

    let conf = get_configuration(None)?;
    let leptos_options = conf.leptos_options;
    let routes = generate_route_list(App);

    let app = Router::new()
        .leptos_routes_with_context(
            &leptos_options,
            routes,
            {
                let pool = pool.clone();
                move || provide_context(pool.clone())
            },
            {
                let leptos_options = leptos_options.clone();
                move || shell(leptos_options.clone())
            },
        )
        .fallback(leptos_axum::file_and_error_handler(shell))
        .layer(CompressionLayer::new())
        .layer(ForwardedHeadersLayer)
        .layer(OtelInResponseLayer)
        .layer(OtelAxumLayer::default())
        .with_state(leptos_options);

    if let Some(socket_path) = &config.socket {
        tracing::info!("listening on unix socket {}", socket_path);
        let listener = tokio::net::UnixListener::bind(socket_path)
            .with_context(|| format!("failed to bind {socket_path}"))?;
        axum::serve(listener, app.into_make_service()).await?;
    } else {
        let addr: std::net::SocketAddr = config
            .listen
            .parse()
            .with_context(|| format!("invalid listen address {}", config.listen))?;
        tracing::info!("listening on http://{}", &addr);
        let listener = tokio::net::TcpListener::bind(&addr).await?;
        axum::serve(listener, app.into_make_service()).await?;
    }

    Ok(())
}

#[cfg(not(feature = "ssr"))]
pub fn main() {
    // no client-side main function
    // see lib.rs for hydration function instead
}
