use drillbook_codec::{Codec, CodecStrategy};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let strs = ["lint", "code", "love", "you", "Grüße"];
    println!("Input: {strs:?}");

    for strategy in [CodecStrategy::BytePrefixed, CodecStrategy::WordPrefixed] {
        let encoded = strategy.encode(&strs).expect("encode");
        println!("{strategy}: {} bytes {encoded:?}", encoded.len());

        let decoded = strategy.decode(&encoded).expect("decode");
        println!("{strategy}: decoded {decoded:?}");
    }

    let truncated = [3, b'a', b'b'];
    match CodecStrategy::BytePrefixed.decode(&truncated) {
        Ok(strs) => println!("Unexpectedly decoded {strs:?}"),
        Err(e) => println!("Truncated buffer rejected: {e}"),
    }

    let too_long = "x".repeat(300);
    if let Err(e) = CodecStrategy::BytePrefixed.encoded_len(&[too_long.as_str()]) {
        println!("Over-long string rejected: {e}");
    }
}
