use nalgebra::Vector3;

pub type Vec3<S> = Vector3<S>;
pub type Vec3i = Vector3<isize>;
pub type Vec3f = Vector3<f32>;
