use crate::{SolveEngine, SubsetSolver};

pub struct SolveEngineBuilder<S: SubsetSolver> {
    solver: S,
    step_budget: Option<usize>,
}

impl<S: SubsetSolver> SolveEngineBuilder<S> {
    pub fn new(solver: S) -> Self {
        Self {
            solver,
            step_budget: None,
        }
    }
    pub fn with_step_budget(mut self, limit: usize) -> Self {
        self.step_budget = Some(limit);
        self
    }
    pub fn unlimited(mut self) -> Self {
        self.step_budget = None;
        self
    }
    pub fn build(self) -> SolveEngine<S> {
        match self.step_budget {
            Some(limit) => SolveEngine::with_step_budget(self.solver, limit),
            None => SolveEngine::new(self.solver),
        }
    }
}
