use num_traits::NumCast;

use crate::{
    geometry::traits::{ClosestPoint3, HasScalarType, Number, RealNumber},
    helpers::aliases::Vec3,
};

use super::sphere3::Sphere3;

fn cwise_min<TScalar: Number>(a: &Vec3<TScalar>, b: &Vec3<TScalar>) -> Vec3<TScalar> {
    a.zip_map(b, |x, y| if x < y { x } else { y })
}

fn cwise_max<TScalar: Number>(a: &Vec3<TScalar>, b: &Vec3<TScalar>) -> Vec3<TScalar> {
    a.zip_map(b, |x, y| if x > y { x } else { y })
}

/// Axis-aligned box, used both as a geometric bounding volume and, with `TScalar = isize`,
/// as a spatial grid cell range.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Box3<TScalar: Number> {
    min: Vec3<TScalar>,
    max: Vec3<TScalar>,
}

impl<TScalar: Number> Box3<TScalar> {
    pub fn new(min: Vec3<TScalar>, max: Vec3<TScalar>) -> Self {
        Self { min, max }
    }

    pub fn empty() -> Self {
        Self {
            min: Vec3::zeros(),
            max: Vec3::zeros(),
        }
    }

    #[inline]
    pub fn get_min(&self) -> &Vec3<TScalar> {
        &self.min
    }

    #[inline]
    pub fn get_max(&self) -> &Vec3<TScalar> {
        &self.max
    }

    #[inline]
    pub fn get_center(&self) -> Vec3<TScalar> {
        let half: TScalar = NumCast::from(0.5).unwrap_or(TScalar::one());
        (self.min + self.max) * half
    }

    #[inline]
    pub fn size_x(&self) -> TScalar {
        self.max.x - self.min.x
    }

    #[inline]
    pub fn size_y(&self) -> TScalar {
        self.max.y - self.min.y
    }

    #[inline]
    pub fn size_z(&self) -> TScalar {
        self.max.z - self.min.z
    }

    /// Extends this box to also cover `other`.
    #[inline]
    pub fn union_box(&mut self, other: &Box3<TScalar>) -> &mut Self {
        self.min = cwise_min(&self.min, &other.min);
        self.max = cwise_max(&self.max, &other.max);
        self
    }

    /// Returns the ith box vertex in order: (x,y,z),(X,y,z),(x,Y,z),(X,Y,z),(x,y,Z),(X,y,Z),(x,Y,Z),(X,Y,Z)
    #[inline]
    pub fn vertex(&self, i: u8) -> Vec3<TScalar> {
        Vec3::new(
            self.min.x + NumCast::from(i % 2).unwrap() * self.size_x(),
            self.min.y + NumCast::from((i / 2) % 2).unwrap() * self.size_y(),
            self.min.z + NumCast::from(if i > 3 { 1 } else { 0 }).unwrap() * self.size_z(),
        )
    }

    #[inline]
    pub fn volume(&self) -> TScalar {
        self.size_x() * self.size_y() * self.size_z()
    }

    pub fn squared_distance(&self, point: &Vec3<TScalar>) -> TScalar {
        let mut sq_distance = TScalar::zero();

        for i in 0..3 {
            let v = point[i];

            if v < self.min[i] {
                sq_distance += (self.min[i] - v) * (self.min[i] - v);
            }

            if v > self.max[i] {
                sq_distance += (v - self.max[i]) * (v - self.max[i]);
            }
        }

        sq_distance
    }

    #[inline]
    pub fn contains_point(&self, point: &Vec3<TScalar>) -> bool {
        point.x >= self.min.x
            && point.x <= self.max.x
            && point.y >= self.min.y
            && point.y <= self.max.y
            && point.z >= self.min.z
            && point.z <= self.max.z
    }

    /// Test bbox - bbox intersection
    pub fn intersects_box3(&self, other: &Box3<TScalar>) -> bool {
        if self.max[0] < other.min[0] || self.min[0] > other.max[0] {
            return false;
        }

        if self.max[1] < other.min[1] || self.min[1] > other.max[1] {
            return false;
        }

        if self.max[2] < other.min[2] || self.min[2] > other.max[2] {
            return false;
        }

        true
    }
}

impl<TScalar: RealNumber> Box3<TScalar> {
    #[inline]
    pub fn size_max(&self) -> TScalar {
        let xy = num_traits::Float::max(self.size_x(), self.size_y());
        num_traits::Float::max(xy, self.size_z())
    }

    #[inline]
    pub fn intersects_sphere3(&self, sphere: &Sphere3<TScalar>) -> bool {
        sphere.intersects_box3(self)
    }
}

impl<TScalar: RealNumber> HasScalarType for Box3<TScalar> {
    type ScalarType = TScalar;
}

impl<TScalar: RealNumber> ClosestPoint3 for Box3<TScalar> {
    #[inline]
    fn closest_point(&self, point: &Vec3<TScalar>) -> Vec3<TScalar> {
        cwise_min(&cwise_max(&self.min, point), &self.max)
    }
}
