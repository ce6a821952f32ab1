use crate::geometry::traits::RealNumber;
use crate::mesh::corner_table::{CornerTable, VertexId};
use num_traits::cast;

/// `mult(v1, v2) = clamp(lerp(0.5, 1.5, t), 0.5, 1.5)` (§4.3/§4.4), where `t` is
/// the averaged per-vertex quality of `v1`/`v2` normalized against the mesh's
/// 10th/90th-percentile quality spread. Per-vertex quality is left unstored
/// (§9 explicitly permits leaving it zero, "without loss of correctness"), so
/// `minQ == maxQ` always holds and this degenerate case is defined here to
/// fall back to the neutral multiplier `1.0` rather than dividing by zero —
/// the adaptive split/collapse callers still apply the rest of §4.3/§4.4's
/// formula (the `2·lengthThr` floor, the `mult·minLength` threshold) around it.
pub(crate) fn adaptive_mult<S: RealNumber>(
    _mesh: &CornerTable<S>,
    _v1: VertexId,
    _v2: VertexId,
) -> S {
    S::one()
}

/// Counters incremented once per successful local operation. The sole
/// observable signal that a pass did anything, since predicate rejections are
/// not errors (see [`crate::RemeshError`]).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RemeshStatistics {
    pub split_num: usize,
    pub collapse_num: usize,
    pub flip_num: usize,
}

/// Builder-style configuration for [`crate::remesh`]/[`crate::remesh_against`],
/// following the same shape as this codebase's `IncrementalRemesher`.
///
/// ## Example
/// ```ignore
/// let params = Params::new(0.1f32)
///     .with_iterations_count(5)
///     .with_feature_angle_deg(30.0)
///     .with_adaptive(true);
/// remesh(&mut mesh, &params);
/// ```
pub struct Params<S: RealNumber> {
    target_length: S,
    feature_angle_deg: S,
    max_surf_dist: S,
    aspect_ratio_thr: S,
    fold_angle_cos_thr: S,
    iterations_count: usize,
    adaptive: bool,
    split_enabled: bool,
    collapse_enabled: bool,
    swap_enabled: bool,
    smooth_enabled: bool,
    project_enabled: bool,
    selected_only: bool,
    user_selected_creases: bool,
    surf_dist_check: bool,
    callback: Option<Box<dyn FnMut(u32, &str)>>,
    pub stat: RemeshStatistics,
}

impl<S: RealNumber> Params<S> {
    pub fn new(target_length: S) -> Self {
        Self {
            target_length,
            ..Default::default()
        }
    }

    #[inline]
    pub fn with_target_length(mut self, target_length: S) -> Self {
        self.target_length = target_length;
        self
    }

    /// Dihedral angle, in degrees, above which an edge is auto-tagged a crease. Default `30`.
    #[inline]
    pub fn with_feature_angle_deg(mut self, deg: S) -> Self {
        self.feature_angle_deg = deg;
        self
    }

    /// Hausdorff cap between the working mesh and the reference surface.
    #[inline]
    pub fn with_max_surf_dist(mut self, dist: S) -> Self {
        self.max_surf_dist = dist;
        self
    }

    /// Radii-ratio quality below which a triangle is a fold-relax candidate. Default `0.05`.
    #[inline]
    pub fn with_aspect_ratio_thr(mut self, thr: S) -> Self {
        self.aspect_ratio_thr = thr;
        self
    }

    /// Dihedral cosine below which a pair of faces is considered folded. Default `cos(140°)`.
    #[inline]
    pub fn with_fold_angle_cos_thr(mut self, thr: S) -> Self {
        self.fold_angle_cos_thr = thr;
        self
    }

    /// Number of outer iterations. Default `1`.
    #[inline]
    pub fn with_iterations_count(mut self, iterations: usize) -> Self {
        self.iterations_count = iterations;
        self
    }

    /// Enables quality-weighted split/collapse thresholds. Default `false`.
    #[inline]
    pub fn with_adaptive(mut self, adaptive: bool) -> Self {
        self.adaptive = adaptive;
        self
    }

    #[inline]
    pub fn with_split(mut self, enabled: bool) -> Self {
        self.split_enabled = enabled;
        self
    }

    #[inline]
    pub fn with_collapse(mut self, enabled: bool) -> Self {
        self.collapse_enabled = enabled;
        self
    }

    #[inline]
    pub fn with_swap(mut self, enabled: bool) -> Self {
        self.swap_enabled = enabled;
        self
    }

    #[inline]
    pub fn with_smooth(mut self, enabled: bool) -> Self {
        self.smooth_enabled = enabled;
        self
    }

    #[inline]
    pub fn with_project(mut self, enabled: bool) -> Self {
        self.project_enabled = enabled;
        self
    }

    /// Restricts every pass to the selected sub-mesh (vertices with both incident edges selected). Default `false`.
    #[inline]
    pub fn with_selected_only(mut self, selected_only: bool) -> Self {
        self.selected_only = selected_only;
        self
    }

    /// Trusts caller-supplied crease flags instead of auto-tagging. Default `false`.
    #[inline]
    pub fn with_user_selected_creases(mut self, user_selected: bool) -> Self {
        self.user_selected_creases = user_selected;
        self
    }

    /// Enables the Hausdorff guard on every mutating operation. Default `false`.
    #[inline]
    pub fn with_surf_dist_check(mut self, enabled: bool) -> Self {
        self.surf_dist_check = enabled;
        self
    }

    /// Optional progress hook, invoked once per outer iteration with a percentage and a label.
    #[inline]
    pub fn with_callback(mut self, callback: impl FnMut(u32, &str) + 'static) -> Self {
        self.callback = Some(Box::new(callback));
        self
    }

    #[inline]
    pub fn target_length(&self) -> S {
        self.target_length
    }

    #[inline]
    pub fn min_length(&self) -> S {
        cast::<f64, S>(4.0 / 5.0).unwrap() * self.target_length
    }

    #[inline]
    pub fn max_length(&self) -> S {
        cast::<f64, S>(4.0 / 3.0).unwrap() * self.target_length
    }

    #[inline]
    pub fn length_thr(&self) -> S {
        self.max_length()
    }

    #[inline]
    pub fn minimal_admitted_area(&self) -> S {
        self.min_length() * self.min_length() / cast(1000.0).unwrap()
    }

    #[inline]
    pub fn crease_angle_cos(&self) -> S {
        self.feature_angle_deg.to_radians().cos()
    }

    #[inline]
    pub fn max_surf_dist(&self) -> S {
        self.max_surf_dist
    }

    #[inline]
    pub fn aspect_ratio_thr(&self) -> S {
        self.aspect_ratio_thr
    }

    #[inline]
    pub fn fold_angle_cos_thr(&self) -> S {
        self.fold_angle_cos_thr
    }

    #[inline]
    pub fn iterations_count(&self) -> usize {
        self.iterations_count
    }

    #[inline]
    pub fn adaptive(&self) -> bool {
        self.adaptive
    }

    #[inline]
    pub fn split_enabled(&self) -> bool {
        self.split_enabled
    }

    #[inline]
    pub fn collapse_enabled(&self) -> bool {
        self.collapse_enabled
    }

    #[inline]
    pub fn swap_enabled(&self) -> bool {
        self.swap_enabled
    }

    #[inline]
    pub fn smooth_enabled(&self) -> bool {
        self.smooth_enabled
    }

    #[inline]
    pub fn project_enabled(&self) -> bool {
        self.project_enabled
    }

    #[inline]
    pub fn selected_only(&self) -> bool {
        self.selected_only
    }

    #[inline]
    pub fn user_selected_creases(&self) -> bool {
        self.user_selected_creases
    }

    #[inline]
    pub fn surf_dist_check(&self) -> bool {
        self.surf_dist_check
    }

    pub(crate) fn report_progress(&mut self, percent: u32, label: &str) {
        if let Some(callback) = &mut self.callback {
            callback(percent, label);
        }
    }
}

impl<S: RealNumber> Default for Params<S> {
    fn default() -> Self {
        Self {
            target_length: S::one(),
            feature_angle_deg: cast(30.0).unwrap(),
            max_surf_dist: cast(0.1).unwrap(),
            aspect_ratio_thr: cast(0.05).unwrap(),
            fold_angle_cos_thr: cast::<f64, S>(140.0).unwrap().to_radians().cos(),
            iterations_count: 1,
            adaptive: false,
            split_enabled: true,
            collapse_enabled: true,
            swap_enabled: true,
            smooth_enabled: true,
            project_enabled: true,
            selected_only: false,
            user_selected_creases: false,
            surf_dist_check: false,
            callback: None,
            stat: RemeshStatistics::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Params;
    use test_case::test_case;

    #[test]
    fn derives_thresholds_from_target_length() {
        let params = Params::new(1.2f32);

        assert!((params.min_length() - 0.96).abs() < 1e-6);
        assert!((params.max_length() - 1.6).abs() < 1e-6);
        assert!((params.minimal_admitted_area() - (0.96 * 0.96 / 1000.0)).abs() < 1e-6);
    }

    #[test_case(1.0, 0.8, 4.0 / 3.0; "unit target length")]
    #[test_case(0.3, 0.24, 0.4; "sub-unit target length")]
    #[test_case(10.0, 8.0, 40.0 / 3.0; "large target length")]
    fn min_and_max_length_scale_linearly_with_target_length(
        target_length: f32,
        expected_min: f32,
        expected_max: f32,
    ) {
        let params = Params::new(target_length);
        assert!((params.min_length() - expected_min).abs() < 1e-5);
        assert!((params.max_length() - expected_max).abs() < 1e-5);
    }

    #[test]
    fn crease_angle_cos_matches_feature_angle() {
        let params = Params::new(1.0f32).with_feature_angle_deg(60.0);
        assert!((params.crease_angle_cos() - 0.5).abs() < 1e-5);
    }

    #[test]
    fn callback_is_invoked() {
        use std::cell::RefCell;
        use std::rc::Rc;

        let calls = Rc::new(RefCell::new(Vec::new()));
        let calls_clone = calls.clone();

        let mut params = Params::new(1.0f32).with_callback(move |percent, label| {
            calls_clone.borrow_mut().push((percent, label.to_string()));
        });

        params.report_progress(50, "remeshing");
        assert_eq!(calls.borrow()[0], (50, "remeshing".to_string()));
    }
}
