pub mod codec;

pub use codec::{HickoryCodec, RecordTypeMapper};
