use nalgebra::{
    DMatrix,
    SymmetricEigen
};
use tracing::debug;

use crate::math::integrand::integrand::Integrand;
use crate::math::quadrature::interval::Interval;
use crate::math::quadrature::quadratureerror::QuadratureError;
use crate::math::quadrature::quadraturerule::{
    MAX_SUBINTERVALS,
    QuadratureRule,
    finite_estimate,
    sample
};

pub const GAUSS_RULE_NAME: &str = "Composite Gaussian Quadrature Rule";

/// Largest node table built; Golub-Welsch allocates a points × points matrix.
pub const MAX_GAUSS_POINTS: usize = 1024;

// ─────────────────────────────────────────────────────────────────────────────
// GaussLegendreTable
// ─────────────────────────────────────────────────────────────────────────────
//
// [-1, 1] 上的節點與權重。m = 1, 2 使用封閉解，m >= 3 使用 Golub-Welsch：
//
//   J = tridiag(β_k),  β_k = k / sqrt(4k² - 1),  k = 1..m-1
//
//   節點 = J 的特徵值
//   權重 w_i = 2·v_{0,i}²（v_i 為單位特徵向量）

#[derive(Debug, Clone, PartialEq)]
pub struct GaussLegendreTable {
    nodes: Vec<f64>,
    weights: Vec<f64>
}

impl GaussLegendreTable {
    pub fn new(points: usize) -> Result<GaussLegendreTable, QuadratureError> {
        match points {
            0 => Err(QuadratureError::invalid_argument(
                GAUSS_RULE_NAME,
                "need at least 1 quadrature point"
            )),
            points if points > MAX_GAUSS_POINTS => Err(QuadratureError::invalid_argument(
                GAUSS_RULE_NAME,
                format!("{} quadrature points exceed the limit of {}", points, MAX_GAUSS_POINTS)
            )),
            1 => Ok(GaussLegendreTable { nodes: vec![0.0], weights: vec![2.0] }),
            2 => Ok(Self::two_point()),
            _ => Ok(Self::golub_welsch(points))
        }
    }

    fn two_point() -> GaussLegendreTable {
        let x = (1.0f64 / 3.0).sqrt();
        GaussLegendreTable { nodes: vec![-x, x], weights: vec![1.0, 1.0] }
    }

    fn golub_welsch(points: usize) -> GaussLegendreTable {
        let mut jacobi = DMatrix::<f64>::zeros(points, points);
        for k in 1..points {
            let k_f = k as f64;
            let beta = k_f / (4.0 * k_f * k_f - 1.0).sqrt();
            jacobi[(k - 1, k)] = beta;
            jacobi[(k, k - 1)] = beta;
        }
        let eigen = SymmetricEigen::new(jacobi);

        let mut pairs: Vec<(f64, f64)> = eigen.eigenvalues
            .iter()
            .enumerate()
            .map(|(i, &node)| (node, 2.0 * eigen.eigenvectors[(0, i)].powi(2)))
            .collect();
        pairs.sort_by(|lhs, rhs| lhs.0.total_cmp(&rhs.0));

        let (nodes, weights) = pairs.into_iter().unzip();
        GaussLegendreTable { nodes, weights }
    }

    pub fn points(&self) -> usize {
        self.nodes.len()
    }

    pub fn nodes(&self) -> &[f64] {
        &self.nodes
    }

    pub fn weights(&self) -> &[f64] {
        &self.weights
    }

    /// Nodes mapped from [-1, 1] onto `interval` via x = (b − a)/2·ξ + (a + b)/2.
    pub fn mapped_nodes(&self, interval: &Interval) -> Vec<f64> {
        let half_width = interval.half_width();
        let midpoint = interval.midpoint();
        self.nodes
            .iter()
            .map(|&xi| half_width * xi + midpoint)
            .collect()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// CompositeGaussLegendre
// ─────────────────────────────────────────────────────────────────────────────

/// m-point Gauss-Legendre summed over p equal panels.
///
/// The default, 2 points on a single panel, is the classical two-point rule
/// (b − a)/2·(f(x_1) + f(x_2)); despite the name no subdivision takes place
/// unless more panels are asked for.
#[derive(Debug, Clone, PartialEq)]
pub struct CompositeGaussLegendre {
    table: GaussLegendreTable,
    panels: usize,
    name: String
}

impl CompositeGaussLegendre {
    pub fn new(points: usize, panels: usize) -> Result<CompositeGaussLegendre, QuadratureError> {
        if panels == 0 {
            return Err(QuadratureError::invalid_argument(GAUSS_RULE_NAME, "need at least 1 panel"));
        }
        if panels > MAX_SUBINTERVALS {
            return Err(QuadratureError::invalid_argument(
                GAUSS_RULE_NAME,
                format!("{} panels exceed the limit of {}", panels, MAX_SUBINTERVALS)
            ));
        }
        let table = GaussLegendreTable::new(points)?;
        if points.checked_mul(panels).is_none_or(|nodes| nodes > MAX_SUBINTERVALS) {
            return Err(QuadratureError::invalid_argument(
                GAUSS_RULE_NAME,
                format!("{} points on {} panels exceed the limit of {} nodes", points, panels, MAX_SUBINTERVALS)
            ));
        }
        let name = if points == 2 && panels == 1 {
            GAUSS_RULE_NAME.to_owned()
        } else {
            format!("{} ({}-point, {} panel{})",
                    GAUSS_RULE_NAME, points, panels, if panels == 1 { "" } else { "s" })
        };
        Ok(CompositeGaussLegendre { table, panels, name })
    }

    pub fn two_point() -> CompositeGaussLegendre {
        CompositeGaussLegendre {
            table: GaussLegendreTable::two_point(),
            panels: 1,
            name: GAUSS_RULE_NAME.to_owned()
        }
    }

    pub fn table(&self) -> &GaussLegendreTable {
        &self.table
    }

    pub fn points(&self) -> usize {
        self.table.points()
    }

    pub fn panels(&self) -> usize {
        self.panels
    }
}

impl Default for CompositeGaussLegendre {
    fn default() -> Self {
        CompositeGaussLegendre::two_point()
    }
}

impl QuadratureRule for CompositeGaussLegendre {
    fn name(&self) -> &str {
        &self.name
    }

    fn integrate(&self, integrand: &dyn Integrand, interval: &Interval) -> Result<f64, QuadratureError> {
        interval.validate(self.name())?;
        let panels = interval.panels(self.panels);
        let nodes: Vec<f64> = panels
            .iter()
            .flat_map(|panel| self.table.mapped_nodes(panel))
            .collect();
        let y = sample(self.name(), integrand, &nodes)?;

        let points = self.table.points();
        let estimate: f64 = panels
            .iter()
            .zip(y.chunks(points))
            .map(|(panel, values)| {
                let weighted: f64 = self.table.weights
                    .iter()
                    .zip(values.iter())
                    .map(|(&w, &v)| w * v)
                    .sum();
                panel.half_width() * weighted
            })
            .sum();
        debug!(rule = self.name(), points, panels = self.panels, estimate, "gauss-legendre evaluated");
        finite_estimate(self.name(), estimate)
    }
}

pub fn gauss_legendre_two_point(integrand: &dyn Integrand, a: f64, b: f64) -> Result<f64, QuadratureError> {
    CompositeGaussLegendre::two_point().integrate(integrand, &Interval::new(a, b))
}
