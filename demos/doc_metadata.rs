//! Annotate a small controller and print the collected parameter metadata.
//!
//! Run with: cargo run --example doc_metadata
//! Set RUST_LOG=anota=trace to watch individual metadata writes.

use anota::prelude::*;

fn main() -> anota::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let controller = Controller::new("UsersController")
        .handler("list_users")
        .handler("get_user")
        .handler("render_avatar");

    let mut store = MetadataStore::new();
    store.mark_operation(&controller.handlers()[0], Operation::new("GET", "/users"));
    store.mark_operation(&controller.handlers()[1], Operation::new("GET", "/users/:id"));
    // render_avatar is a plain helper; it never gets marked.

    // Every route handler on the controller takes the tenant header.
    ParamAnnotator::header(ParameterOptions::new().name("x-tenant-id"))?
        .annotate_controller(&mut store, &controller);

    // get_user alone takes the path id and an optional status filter.
    let get_user = &controller.handlers()[1];
    ParamAnnotator::path(ParameterOptions::new().name("id").description("user id"))?
        .annotate_handler(&mut store, get_user);
    ParamAnnotator::query(
        ParameterOptions::new()
            .name("status")
            .required(false)
            .enumeration(["active", "archived"])
            .enum_name("UserStatus"),
    )?
    .annotate_handler(&mut store, get_user);

    for handler in controller.handlers() {
        let params = store.parameters(&handler.target());
        println!(
            "{}::{} -> {}",
            controller.name(),
            handler.name(),
            serde_json::to_string_pretty(&params).unwrap_or_default()
        );
    }

    Ok(())
}
