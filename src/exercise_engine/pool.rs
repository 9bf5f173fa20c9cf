use rand::{seq::SliceRandom, Rng};

/// Synthetic element names problems are drawn from.
pub const SUBJECT_NAMES: [&str; 8] = [
    "Alpha", "Beta", "Gamma", "Delta", "Epsilon", "Zeta", "Theta", "Omega",
];

/// Subject names in a random order, handed out without replacement.
pub struct SubjectPool {
    order: Vec<&'static str>,
    next: usize,
}

impl SubjectPool {
    pub fn new_shuffled<R: Rng>(rng: &mut R) -> Self {
        let mut order = SUBJECT_NAMES.to_vec();
        order.shuffle(rng);
        SubjectPool { order, next: 0 }
    }

    /// Next unused name, or `None` once every name has been handed out.
    pub fn draw(&mut self) -> Option<&'static str> {
        let name = self.order.get(self.next).copied()?;
        self.next += 1;
        Some(name)
    }

    /// Up to `n` unused names; a short list once the pool runs dry.
    pub fn draw_n(&mut self, n: usize) -> Vec<&'static str> {
        (0..n).map_while(|_| self.draw()).collect()
    }
}
