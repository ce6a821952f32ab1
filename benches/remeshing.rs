use criterion::{criterion_group, criterion_main, Criterion};
use isotropic_remesh::{remesh, CornerTable, Params};
use nalgebra::Vector3;

/// A flat NxN grid of unit quads (split into two triangles each), the
/// simplest input that already has edges at a known uniform length.
fn grid_mesh(resolution: usize) -> CornerTable<f64> {
    let mut vertices = Vec::with_capacity(resolution * resolution);
    for i in 0..resolution {
        for j in 0..resolution {
            vertices.push(Vector3::new(i as f64, j as f64, 0.0));
        }
    }

    let mut indices = Vec::new();
    for i in 0..resolution - 1 {
        for j in 0..resolution - 1 {
            let v00 = i * resolution + j;
            let v01 = i * resolution + j + 1;
            let v10 = (i + 1) * resolution + j;
            let v11 = (i + 1) * resolution + j + 1;

            indices.extend_from_slice(&[v00, v10, v11]);
            indices.extend_from_slice(&[v00, v11, v01]);
        }
    }

    CornerTable::from_vertex_and_face_slices(&vertices, &indices)
}

fn criterion_benchmark(c: &mut Criterion) {
    let resolutions = [8usize, 16, 32];

    for resolution in resolutions {
        let mesh = grid_mesh(resolution);
        let mut group = c.benchmark_group(format!("{resolution}x{resolution} grid"));

        group.bench_function("remesh 1 iteration", |b| {
            b.iter(|| {
                let mut working = mesh.clone();
                let mut params = Params::new(0.7).with_iterations_count(1);
                remesh(&mut working, &mut params);
            })
        });

        group.bench_function("remesh 3 iterations, adaptive", |b| {
            b.iter(|| {
                let mut working = mesh.clone();
                let mut params = Params::new(0.7).with_iterations_count(3).with_adaptive(true);
                remesh(&mut working, &mut params);
            })
        });
    }
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
