use masjid_core::gateways::mosque::MosqueGateway;

pub struct Mosques(pub Box<dyn MosqueGateway + Send + Sync>);

#[derive(Debug, Clone, Copy)]
pub struct Version(pub &'static str);
