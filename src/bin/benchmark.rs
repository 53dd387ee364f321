//! Headless throughput benchmark for the sparse engine

use std::time::Instant;

use sparse_life::{Life, Pattern, presets};

/// Run `generations` updates; returns (ms per generation, final population)
fn benchmark_pattern(pattern: &Pattern, generations: u32) -> (f64, usize) {
    let mut life = Life::new();
    life.add_alive_points(pattern.cells.iter().copied());

    let start = Instant::now();
    for _ in 0..generations {
        life.update();
    }
    let ms_per_gen = start.elapsed().as_secs_f64() * 1000.0 / generations as f64;
    (ms_per_gen, life.population())
}

fn main() {
    env_logger::init();

    println!("=== Sparse Life Benchmark ===\n");

    let cases = [
        (presets::glider(), 1_000),
        (presets::glider_gun(), 1_000),
        (presets::r_pentomino(), 1_103),
        (presets::acorn(), 5_206),
        (presets::space_rake(), 1_000),
        (presets::thin_brick_layer(), 1_000),
    ];

    println!("{:>20} {:>8} {:>12} {:>12} {:>14}", "Pattern", "Gens", "ms/gen", "Population", "Cells/sec");
    println!("{:-<70}", "");

    for (pattern, generations) in &cases {
        let (ms_per_gen, population) = benchmark_pattern(pattern, *generations);
        let cells_per_sec = if ms_per_gen > 0.0 {
            population as f64 / (ms_per_gen / 1000.0)
        } else {
            0.0
        };
        println!(
            "{:>20} {:>8} {:>12.4} {:>12} {:>14.0}",
            pattern.name, generations, ms_per_gen, population, cells_per_sec
        );
    }
}
