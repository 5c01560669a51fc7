use std::env;
use std::f64::consts::PI;
use std::fs::File;
use std::io::Write;
use std::path::Path;

const DEPTH: usize = 30;

fn compute_atan_table() -> [i32; DEPTH] {
    const FULL_TURN: f64 = (1u64 << 32) as f64;
    (0..DEPTH)
        .map(|i| (f64::atan(f64::powf(2.0, -(i as f64))) * FULL_TURN / (2.0 * PI)).round() as i32)
        .collect::<Vec<i32>>()
        .try_into()
        .unwrap()
}

fn compute_gain_table() -> [f64; DEPTH] {
    let mut k = 1.0;
    (0..DEPTH)
        .map(|i| { k *= f64::sqrt(1.0 + f64::powf(2.0, -2.0 * i as f64)); k })
        .collect::<Vec<f64>>()
        .try_into()
        .unwrap()
}

fn main() {
    let out_dir = env::var_os("OUT_DIR").unwrap();
    let dest_path = Path::new(&out_dir).join("cordic_tables.rs");
    let mut f = File::create(dest_path).unwrap();

    let atan_table = compute_atan_table();
    writeln!(&mut f, "/// Micro-rotation angles `atan(2^-i)` in angle code units").unwrap();
    writeln!(&mut f, "pub const ATAN_TABLE: [i32; {}] = {:?};", atan_table.len(), atan_table).unwrap();
    let gain_table = compute_gain_table();
    writeln!(&mut f, "/// Cumulative CORDIC gain after `i + 1` micro-rotations").unwrap();
    writeln!(&mut f, "pub const GAIN_TABLE: [f64; {}] = {:?};", gain_table.len(), gain_table).unwrap();

    println!("cargo:rerun-if-changed=build.rs");
}
