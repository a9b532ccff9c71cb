pub mod descriptor;
pub(crate) mod list_reader;
pub mod network;

pub use descriptor::NetworkDescriptor;
pub use network::Network;
