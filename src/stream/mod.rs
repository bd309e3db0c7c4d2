pub mod addr;

pub use self::addr::AddrStream;
pub use self::addr::SourceError;
