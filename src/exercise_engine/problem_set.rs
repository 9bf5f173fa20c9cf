use log::debug;
use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::exercise_engine::{
    generator::generate_problem,
    helpers::problem_id,
    models::{Problem, ProblemSetRequest},
    pool::SubjectPool,
};

/// Build up to `count` problems, each for a different synthetic element.
///
/// Names are drawn without replacement from a shuffled pool, so the result is
/// capped at the pool size and never repeats a subject. Ids follow output
/// position and stay stable for the lifetime of the set.
pub fn generate_set<R: Rng>(rng: &mut R, count: usize) -> Vec<Problem> {
    let mut pool = SubjectPool::new_shuffled(rng);
    let names = pool.draw_n(count);
    debug!("building problem set: requested {count}, delivering {}", names.len());

    names
        .into_iter()
        .enumerate()
        .map(|(index, name)| generate_problem(&mut *rng, name, problem_id(index)))
        .collect()
}

/// Entry point: seed an RNG from the request and build the set.
pub fn generate_problem_set(request: ProblemSetRequest) -> Vec<Problem> {
    let mut rng: StdRng = match request.rng_seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None       => StdRng::from_entropy(),
    };

    generate_set(&mut rng, request.effective_count())
}
