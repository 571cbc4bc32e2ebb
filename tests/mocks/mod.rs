//! Stub collaborators shared by the integration tests.

mod mock_routes;
mod mock_transport;

pub use mock_routes::MockRoutes;
pub use mock_transport::MockTransport;
