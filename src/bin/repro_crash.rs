//! Reproduce AFL crashes without AFL instrumentation
//!
//! Usage: cargo run --bin repro_crash -- <crash_file>

use std::fs;

use rangesum::aggregate::sum_all;
use rangesum::flat::FlatSegmentTree;
use rangesum::tree::SegmentTree;

const MAX_LEN: usize = 100;

#[derive(Debug, Clone, Copy)]
enum FuzzOp {
    Query { a_frac: u8, b_frac: u8 },
    Update { index_frac: u8, value: i8 },
    OutOfBounds { past: u8 },
}

impl FuzzOp {
    fn from_bytes(bytes: &[u8]) -> Option<(FuzzOp, &[u8])> {
        if bytes.is_empty() {
            return None;
        }

        let op_type = bytes[0] % 3;
        let rest = &bytes[1..];

        match op_type {
            0 if rest.len() >= 2 => Some((FuzzOp::Query { a_frac: rest[0], b_frac: rest[1] }, &rest[2..])),
            1 if rest.len() >= 2 => Some((
                FuzzOp::Update { index_frac: rest[0], value: rest[1] as i8 },
                &rest[2..],
            )),
            2 if !rest.is_empty() => Some((FuzzOp::OutOfBounds { past: rest[0] }, &rest[1..])),
            _ => None,
        }
    }
}

fn scale(frac: u8, len: usize) -> usize {
    return ((frac as usize) * len / 256).min(len.saturating_sub(1));
}

fn main() {
    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 {
        eprintln!("Usage: {} <crash_file>", args[0]);
        std::process::exit(1);
    }

    let data = match fs::read(&args[1]) {
        Ok(data) => data,
        Err(err) => {
            eprintln!("failed to read {}: {}", args[1], err);
            std::process::exit(1);
        }
    };
    println!("Input: {} bytes", data.len());

    let Some((&len_byte, rest)) = data.split_first() else {
        println!("Empty input, nothing to replay");
        return;
    };
    let len = (len_byte as usize % (MAX_LEN + 1)).min(rest.len());
    let (initial, mut remaining) = rest.split_at(len);

    let mut model: Vec<i64> = initial.iter().map(|b| *b as i8 as i64).collect();
    let mut boxed = SegmentTree::new(&model);
    let mut flat = FlatSegmentTree::new(&model);
    println!("Initial: {:?}", model);

    let mut step = 0;
    while let Some((op, rest)) = FuzzOp::from_bytes(remaining) {
        remaining = rest;
        println!("Op {}: {:?}", step, op);
        step += 1;

        match op {
            FuzzOp::Query { a_frac, b_frac } => {
                let a = scale(a_frac, model.len());
                let b = scale(b_frac, model.len());
                let (start, end) = (a.min(b), a.max(b));
                let expected = if model.is_empty() { 0 } else { sum_all(&model[start..=end]) };
                println!(
                    "  [{}, {}] expected={} boxed={:?} flat={:?}",
                    start,
                    end,
                    expected,
                    boxed.query(start, end),
                    flat.query(start, end)
                );
                assert_eq!(boxed.query(start, end), Ok(expected));
                assert_eq!(flat.query(start, end), Ok(expected));
            }

            FuzzOp::Update { index_frac, value } => {
                if model.is_empty() {
                    println!("  empty tree: {:?}", boxed.update(0, value as i64));
                    continue;
                }
                let index = scale(index_frac, model.len());
                model[index] = value as i64;
                println!(
                    "  set {} = {}: boxed={:?} flat={:?}",
                    index,
                    value,
                    boxed.update(index, value as i64),
                    flat.update(index, value as i64)
                );
            }

            FuzzOp::OutOfBounds { past } => {
                let start = model.len() + past as usize;
                println!("  [{}, {}] -> {:?}", start, start, boxed.query(start, start));
            }
        }
    }

    println!("Final: {:?}", boxed);
    assert_eq!(boxed.total(), sum_all(&model));
    assert_eq!(flat.total(), sum_all(&model));
    assert_eq!(boxed.to_vec(), model);
    println!("No crash reproduced");
}
