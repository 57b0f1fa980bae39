//! Cyclic media carousel state, one instance per project card.

use std::collections::HashMap;

use folio_model::{Project, ProjectId};

/// Index state over one project's media list.
///
/// `count` is never zero: a project with no media is represented as a single
/// placeholder slot so navigation and rendering stay total.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CarouselState {
    active_index: usize,
    count: usize,
}

impl CarouselState {
    pub fn new(media_len: usize) -> Self {
        CarouselState {
            active_index: 0,
            count: media_len.max(1),
        }
    }

    pub fn active_index(&self) -> usize {
        self.active_index
    }

    pub fn count(&self) -> usize {
        self.count
    }

    /// Advance cyclically. A single-slot carousel cycles onto itself.
    pub fn next(&mut self) {
        self.active_index = (self.active_index + 1) % self.count;
    }

    /// Step back cyclically. Adding `count` first keeps the arithmetic in
    /// unsigned range.
    pub fn previous(&mut self) {
        self.active_index = (self.active_index + self.count - 1) % self.count;
    }

    /// Jump to a specific slot. Out-of-range requests are ignored; they
    /// cannot originate from the rendered selector strip.
    pub fn select(&mut self, index: usize) {
        if index < self.count {
            self.active_index = index;
        } else {
            log::debug!(
                "ignoring out-of-range carousel selection {index} (count {})",
                self.count
            );
        }
    }
}

/// Carousel states for every project, keyed by project id.
#[derive(Debug, Clone, Default)]
pub struct CarouselRegistry {
    states: HashMap<ProjectId, CarouselState>,
}

impl CarouselRegistry {
    pub fn from_projects(projects: &[Project]) -> Self {
        let states = projects
            .iter()
            .map(|project| {
                (project.id.clone(), CarouselState::new(project.media.len()))
            })
            .collect();
        CarouselRegistry { states }
    }

    pub fn get(&self, id: &ProjectId) -> Option<&CarouselState> {
        self.states.get(id)
    }

    /// Active index for a project; unknown projects read as slot zero.
    pub fn active_index(&self, id: &ProjectId) -> usize {
        self.states
            .get(id)
            .map(CarouselState::active_index)
            .unwrap_or(0)
    }

    pub fn next(&mut self, id: &ProjectId) {
        if let Some(state) = self.states.get_mut(id) {
            state.next();
        }
    }

    pub fn previous(&mut self, id: &ProjectId) {
        if let Some(state) = self.states.get_mut(id) {
            state.previous();
        }
    }

    pub fn select(&mut self, id: &ProjectId, index: usize) {
        if let Some(state) = self.states.get_mut(id) {
            state.select(index);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_then_previous_round_trips_from_any_start() {
        for len in 1..=5 {
            for start in 0..len {
                let mut state = CarouselState::new(len);
                state.select(start);

                state.next();
                state.previous();
                assert_eq!(state.active_index(), start);
            }
        }
    }

    #[test]
    fn n_applications_of_next_close_the_cycle() {
        for len in 1..=6 {
            let mut state = CarouselState::new(len);
            for _ in 0..len {
                state.next();
            }
            assert_eq!(state.active_index(), 0);
        }
    }

    #[test]
    fn previous_never_underflows() {
        let mut state = CarouselState::new(3);
        state.previous();
        assert_eq!(state.active_index(), 2);

        let mut single = CarouselState::new(1);
        single.previous();
        assert_eq!(single.active_index(), 0);
    }

    #[test]
    fn select_sets_valid_indices_exactly() {
        let mut state = CarouselState::new(4);
        state.select(2);
        assert_eq!(state.active_index(), 2);
    }

    #[test]
    fn select_ignores_out_of_range_indices() {
        let mut state = CarouselState::new(3);
        state.select(1);

        state.select(3);
        assert_eq!(state.active_index(), 1);
        state.select(usize::MAX);
        assert_eq!(state.active_index(), 1);
    }

    #[test]
    fn empty_media_yields_a_valid_single_slot() {
        let mut state = CarouselState::new(0);
        assert_eq!(state.count(), 1);
        assert_eq!(state.active_index(), 0);

        state.next();
        assert_eq!(state.active_index(), 0);
        state.previous();
        assert_eq!(state.active_index(), 0);
    }

    #[test]
    fn registry_ignores_unknown_project_ids() {
        let mut registry = CarouselRegistry::default();
        let ghost = ProjectId::new("ghost");

        registry.next(&ghost);
        registry.previous(&ghost);
        registry.select(&ghost, 3);
        assert_eq!(registry.active_index(&ghost), 0);
    }
}
