//! Benchmarks for chunk generation and render-window assembly.

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use glam::Vec3;
use ridgeline_terrain::{CacheParams, Chunk, ChunkCoord, TerrainCache};

fn bench_chunk_generation(c: &mut Criterion) {
    c.bench_function("chunk_generate", |b| {
        let mut x = 0;
        b.iter(|| {
            x += 1;
            black_box(Chunk::generate(ChunkCoord::new(x, -x), 42))
        });
    });
}

fn bench_chunk_surface_cached(c: &mut Criterion) {
    let mut cache = TerrainCache::new(CacheParams {
        world_seed: 42,
        ..Default::default()
    });
    // Warm the chunk and its stitching neighbors so the bench isolates
    // the stitch-and-emit path.
    let _ = cache.chunk_surface(ChunkCoord::new(0, 0));

    c.bench_function("chunk_surface_cached", |b| {
        b.iter(|| black_box(cache.chunk_surface(ChunkCoord::new(0, 0))));
    });
}

fn bench_render_window(c: &mut Criterion) {
    c.bench_function("surface_for_render", |b| {
        let mut cache = TerrainCache::new(CacheParams {
            world_seed: 42,
            ..Default::default()
        });
        let cam = Vec3::new(8.0, 10.0, 8.0);
        b.iter(|| black_box(cache.surface_for_render(cam)));
    });
}

criterion_group!(
    benches,
    bench_chunk_generation,
    bench_chunk_surface_cached,
    bench_render_window
);
criterion_main!(benches);
