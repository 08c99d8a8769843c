mod message_codec;

pub use message_codec::MessageCodec;
