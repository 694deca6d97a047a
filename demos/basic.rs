//! Encodes a message, injects a couple of symbol errors, and decodes it back.
//!
//! Run with `cargo run --example basic`.

use reed_solomon_codec::{CodeParams, ReedSolomon, Rs15_9};

fn main() {
    let rs: ReedSolomon<Rs15_9> = ReedSolomon::new();

    let message: [u16; 9] = [6, 15, 8, 9, 8, 3, 0, 0, 5];
    let mut codeword = rs.encode(&message);
    println!("message:  {:?}", message);
    println!("codeword: {:?}", codeword);

    codeword[2] ^= 0x7;
    codeword[11] ^= 0x3;
    println!("received: {:?} (2 symbol errors injected)", codeword);

    match rs.decode(&codeword) {
        Some(recovered) => println!("recovered: {:?} ({})", recovered, recovered == message),
        None => println!("decode failed: too many errors for t={}", Rs15_9::T),
    }
}
