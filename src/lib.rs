// Module layout (Clean Architecture style)
// - bootstrap: configuration and startup wiring
// - infrastructure: Postgres/filesystem adapters
// - presentation: HTTP handlers, auth guard and routing
// - application: ports and use cases
// - domain: core models

pub mod application;
pub mod bootstrap;
pub mod domain;
pub mod infrastructure;
pub mod presentation;
