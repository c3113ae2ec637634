//! Built-in demonstration vectors
//!
//! The fixed sample cases exercised by the original console driver: one
//! scalar of each flavor, fixed and nested arrays, and sibling dynamic
//! arrays with independent offsets.

use crate::{config::Config, output::Output, CliError};

struct Sample {
    signature: &'static str,
    payload: &'static str,
    expected: &'static str,
}

const SAMPLES: &[Sample] = &[
    Sample {
        signature: "function baz(int8)",
        payload: "0xfffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffe",
        expected: "-2",
    },
    Sample {
        signature: "function baz(int80)",
        payload: "0x0000000000000000000000000000000000000000000000000000b29c26f344fe",
        expected: "196383738119422",
    },
    Sample {
        signature: "function baz(uint32)",
        payload: "0xfffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffe",
        expected: "4294967294",
    },
    Sample {
        signature: "function baz(string)",
        payload: concat!(
            "0x",
            "0000000000000000000000000000000000000000000000000000000000000020",
            "000000000000000000000000000000000000000000000000000000000000000b",
            "68656c6c6f20776f726c64000000000000000000000000000000000000000000",
        ),
        expected: "hello world",
    },
    Sample {
        signature: "function baz(bytes[] a, bytes32 b)",
        payload: concat!(
            "0x",
            "0000000000000000000000000000000000000000000000000000000000000040",
            "cb93e7ddea88eb37f5419784b399cf13f7df44079d05905006044dd14bb89811",
            "0000000000000000000000000000000000000000000000000000000000000003",
            "000bf9f2adc93a1da7b9e61f44ee6504f99c467a2812b354d70a07f0b3cdc58c",
            "0007cc5734453f8d7bbacd4b3a8e753250dc4a432aaa5be5b048c59e0b5ac5fc",
            "00120aa407bdbff1d93ea98dafc5f1da56b589b427167ec414bccbe0cfdfd573",
        ),
        expected: "[0x000bf9f2adc93a1da7b9e61f44ee6504f99c467a2812b354d70a07f0b3cdc58c, \
                   0x0007cc5734453f8d7bbacd4b3a8e753250dc4a432aaa5be5b048c59e0b5ac5fc, \
                   0x00120aa407bdbff1d93ea98dafc5f1da56b589b427167ec414bccbe0cfdfd573], \
                   0xcb93e7ddea88eb37f5419784b399cf13f7df44079d05905006044dd14bb89811",
    },
    Sample {
        signature: "function baz(int[3])",
        payload: concat!(
            "0x",
            "000000000000000000000000000000000000000000000000000000000000002a",
            "fffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffd",
            "fffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffb",
        ),
        expected: "[42, -3, -5]",
    },
    Sample {
        signature: "function baz(uint128[2][3], uint)",
        payload: concat!(
            "0x",
            "0000000000000000000000000000000000000000000000000000000000000001",
            "0000000000000000000000000000000000000000000000000000000000000002",
            "0000000000000000000000000000000000000000000000000000000000000003",
            "0000000000000000000000000000000000000000000000000000000000000004",
            "0000000000000000000000000000000000000000000000000000000000000005",
            "0000000000000000000000000000000000000000000000000000000000000006",
            "000000000000000000000000000000000000000000000000000000000000000a",
        ),
        expected: "[[1, 2, 3], [4, 5, 6]], 10",
    },
    Sample {
        signature: "function baz(uint128[2][3][2], uint)",
        payload: concat!(
            "0x",
            "0000000000000000000000000000000000000000000000000000000000000001",
            "0000000000000000000000000000000000000000000000000000000000000002",
            "0000000000000000000000000000000000000000000000000000000000000003",
            "0000000000000000000000000000000000000000000000000000000000000004",
            "0000000000000000000000000000000000000000000000000000000000000005",
            "0000000000000000000000000000000000000000000000000000000000000006",
            "0000000000000000000000000000000000000000000000000000000000000001",
            "0000000000000000000000000000000000000000000000000000000000000002",
            "0000000000000000000000000000000000000000000000000000000000000003",
            "0000000000000000000000000000000000000000000000000000000000000004",
            "0000000000000000000000000000000000000000000000000000000000000005",
            "0000000000000000000000000000000000000000000000000000000000000006",
            "000000000000000000000000000000000000000000000000000000000000000a",
        ),
        expected: "[[[1, 2], [3, 4], [5, 6]], [[1, 2], [3, 4], [5, 6]]], 10",
    },
    Sample {
        signature: "function baz(uint256[] a,uint[] b,uint256[] c)",
        payload: concat!(
            "0x",
            "0000000000000000000000000000000000000000000000000000000000000060",
            "00000000000000000000000000000000000000000000000000000000000000c0",
            "0000000000000000000000000000000000000000000000000000000000000120",
            "0000000000000000000000000000000000000000000000000000000000000002",
            "0000000000000000000000000000000000000000000000000000000000000006",
            "0000000000000000000000000000000000000000000000000000000000000005",
            "0000000000000000000000000000000000000000000000000000000000000002",
            "0000000000000000000000000000000000000000000000015af1d78b58c40000",
            "0000000000000000000000000000000000000000000000015af1d78b58c40000",
            "0000000000000000000000000000000000000000000000000000000000000002",
            "0000000000000000000000000000000000000000000000001bc16d674ec80000",
            "0000000000000000000000000000000000000000000000001bc16d674ec80000",
        ),
        expected: "[6, 5], [25000000000000000000, 25000000000000000000], \
                   [2000000000000000000, 2000000000000000000]",
    },
];

pub fn execute(config: &Config, json: bool) -> Result<(), CliError> {
    let options = config.decode_options();

    for sample in SAMPLES {
        let decoded =
            calldec_abi::decode_with_options(sample.signature, sample.payload, &options)?;
        let ok = decoded == sample.expected;

        Output::new(json)
            .field("signature", sample.signature)
            .field("payload", sample.payload)
            .field("decoded", &decoded)
            .field_bool("ok", ok)
            .message(&format!(
                "{}\n  -> {}\n  [{}]",
                sample.signature,
                decoded,
                if ok { "ok" } else { "MISMATCH" }
            ))
            .print();
    }

    Ok(())
}
