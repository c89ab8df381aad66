/// Mean and sample standard deviation of a set of observations.
#[derive(Debug, Clone, Copy, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Moments {
    pub mean: f64,
    pub stdev: f64,
}

impl FromIterator<f64> for Moments {
    fn from_iter<I: IntoIterator<Item = f64>>(xs: I) -> Self {
        let xs = xs.into_iter().collect::<Vec<f64>>();
        let n = xs.len() as f64;
        if xs.is_empty() {
            return Self::default();
        }
        let mean = xs.iter().sum::<f64>() / n;
        let stdev = match xs.len() {
            1 => 0.,
            _ => (xs.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / (n - 1.)).sqrt(),
        };
        Self { mean, stdev }
    }
}

impl std::fmt::Display for Moments {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{:>10.3} ± {:<10.3}", self.mean, self.stdev)
    }
}
