use num_traits::Float;

use crate::{
    geometry::traits::{ClosestPoint3, HasBBox3, HasScalarType, RealNumber},
    helpers::aliases::Vec3,
};

use super::box3::Box3;

pub type BarycentricCoordinates<TScalar> = Vec3<TScalar>;

/// 3D triangle
pub struct Triangle3<TScalar: RealNumber> {
    a: Vec3<TScalar>,
    b: Vec3<TScalar>,
    c: Vec3<TScalar>,
}

impl<TScalar: RealNumber> Triangle3<TScalar> {
    pub fn new(a: Vec3<TScalar>, b: Vec3<TScalar>, c: Vec3<TScalar>) -> Self {
        Self { a, b, c }
    }

    #[inline]
    pub fn normal(a: &Vec3<TScalar>, b: &Vec3<TScalar>, c: &Vec3<TScalar>) -> Option<Vec3<TScalar>> {
        let cross = (b - a).cross(&(c - a));

        if cross.norm_squared().is_zero() {
            return None;
        }

        Some(cross.normalize())
    }

    #[inline]
    pub fn is_degenerate(a: &Vec3<TScalar>, b: &Vec3<TScalar>, c: &Vec3<TScalar>) -> bool {
        let cross = (b - a).cross(&(c - a));
        cross.norm_squared().is_zero()
    }

    #[inline]
    pub fn area(a: &Vec3<TScalar>, b: &Vec3<TScalar>, c: &Vec3<TScalar>) -> TScalar {
        (b - a).cross(&(c - a)).norm() * TScalar::from(0.5).unwrap()
    }

    /// Quality in `[0, 1]`, 1 for an equilateral triangle, 0 for a degenerate one.
    pub fn quality(a: &Vec3<TScalar>, b: &Vec3<TScalar>, c: &Vec3<TScalar>) -> TScalar {
        let ab = b - a;
        let ac = c - a;
        let double_area = ab.cross(&ac).norm();

        if double_area.is_zero() {
            return TScalar::zero();
        }

        let bc = c - b;

        let ab_len = ab.norm_squared();
        let ac_len = ac.norm_squared();
        let bc_len = bc.norm_squared();
        let len_max = Float::max(Float::max(ab_len, ac_len), bc_len);
        let equilateral_triangle_aspect_ratio = TScalar::from(1.1547005383792515).unwrap();

        equilateral_triangle_aspect_ratio * double_area / len_max
    }

    #[inline]
    pub fn get_normal(&self) -> Option<Vec3<TScalar>> {
        Self::normal(&self.a, &self.b, &self.c)
    }

    #[inline]
    pub fn point_at(&self, barycoords: &BarycentricCoordinates<TScalar>) -> Vec3<TScalar> {
        Vec3::new(
            barycoords.x * self.a.x + barycoords.y * self.b.x + barycoords.z * self.c.x,
            barycoords.x * self.a.y + barycoords.y * self.b.y + barycoords.z * self.c.y,
            barycoords.x * self.a.z + barycoords.y * self.b.z + barycoords.z * self.c.z,
        )
    }
}

impl<TScalar: RealNumber> HasScalarType for Triangle3<TScalar> {
    type ScalarType = TScalar;
}

impl<TScalar: RealNumber> HasBBox3 for Triangle3<TScalar> {
    #[inline]
    fn bbox(&self) -> Box3<TScalar> {
        let mut bbox = Box3::new(self.a, self.a);
        bbox.union_box(&Box3::new(self.b, self.b));
        bbox.union_box(&Box3::new(self.c, self.c));
        bbox
    }
}

impl<TScalar: RealNumber> ClosestPoint3 for Triangle3<TScalar> {
    /// Returns closest point on triangle to given point
    fn closest_point(&self, point: &Vec3<TScalar>) -> Vec3<TScalar> {
        let zero: TScalar = TScalar::zero();

        // Check if P in vertex region outside A
        let ab = self.b - self.a;
        let ac = self.c - self.a;
        let ap = point - self.a;
        let d1 = ab.dot(&ap);
        let d2 = ac.dot(&ap);

        // barycentric coordinates (1,0,0)
        if d1 <= zero && d2 <= zero {
            return self.a;
        }

        // Check if P in vertex region outside B
        let bp = point - self.b;
        let d3 = ab.dot(&bp);
        let d4 = ac.dot(&bp);

        // barycentric coordinates (0,1,0)
        if d3 >= zero && d4 <= d3 {
            return self.b;
        }

        // Check if P in edge region of AB, if so return projection of P onto AB
        let vc = d1 * d4 - d3 * d2;
        if vc <= zero && d1 >= zero && d3 <= zero {
            let v = d1 / (d1 - d3);
            return self.a + ab.scale(v); // barycentric coordinates (1-v,v,0)
        }

        // Check if P in vertex region outside C
        let cp = point - self.c;
        let d5 = ab.dot(&cp);
        let d6 = ac.dot(&cp);

        // barycentric coordinates (0,0,1)
        if d6 >= zero && d5 <= d6 {
            return self.c;
        }

        // Check if P in edge region of AC, if so return projection of P onto AC
        let vb = d5 * d2 - d1 * d6;
        if vb <= zero && d2 >= zero && d6 <= zero {
            let w = d2 / (d2 - d6);
            return self.a + ac.scale(w); // barycentric coordinates (1-w,0,w)
        }

        // Check if P in edge region of BC, if so return projection of P onto BC
        let va = d3 * d6 - d5 * d4;
        if va <= zero && (d4 - d3) >= zero && (d5 - d6) >= zero {
            let w = (d4 - d3) / ((d4 - d3) + (d5 - d6));
            return self.b + (self.c - self.b).scale(w); // barycentric coordinates (0,1-w,w)
        }

        // P inside face region. Compute Q through its barycentric coordinates (u,v,w)
        let denom = TScalar::one() / (va + vb + vc);
        let v = vb * denom;
        let w = vc * denom;

        self.a + ab * v + ac * w
    }
}

#[cfg(test)]
mod tests {
    use crate::helpers::aliases::Vec3;

    use super::Triangle3;

    #[test]
    fn triangle_quality() {
        let equilateral_quality = Triangle3::quality(
            &Vec3::new(-1.0, 1.5, 0.0),
            &Vec3::new(1.0, -2.0, 0.0),
            &Vec3::new(3.0, 1.5, 0.0),
        );

        assert!((1.0 - equilateral_quality).abs() < 0.01);
    }

    #[test]
    fn closest_point_inside_face() {
        let triangle = Triangle3::<f64>::new(
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(4.0, 0.0, 0.0),
            Vec3::new(0.0, 4.0, 0.0),
        );

        let p = Vec3::new(1.0, 1.0, 1.0);
        let closest = triangle.closest_point(&p);

        assert_eq!(closest, Vec3::new(1.0, 1.0, 0.0));
    }

    #[test]
    fn closest_point_outside_vertex() {
        let triangle = Triangle3::<f64>::new(
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(1.0, 0.0, 0.0),
            Vec3::new(0.0, 1.0, 0.0),
        );

        let p = Vec3::new(-1.0, -1.0, 0.0);
        let closest = triangle.closest_point(&p);

        assert_eq!(closest, Vec3::new(0.0, 0.0, 0.0));
    }
}
