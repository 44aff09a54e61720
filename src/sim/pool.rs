//! Fixed-count entity pools

use super::{Frame, Particle, SimRng};
use crate::Viewport;
use crate::renderer::Surface;

/// Fixed-size collection of one entity kind
#[derive(Debug, Clone)]
pub struct Pool<T> {
    entities: Vec<T>,
}

impl<T> Default for Pool<T> {
    fn default() -> Self {
        Self {
            entities: Vec::new(),
        }
    }
}

impl<T: Particle> Pool<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pool of `count` freshly spawned entities
    pub fn with_count(count: usize, viewport: Viewport, rng: &mut SimRng) -> Self {
        let mut pool = Self::new();
        pool.initialize(count, viewport, rng);
        pool
    }

    /// Discard current contents and spawn `count` new entities
    pub fn initialize(&mut self, count: usize, viewport: Viewport, rng: &mut SimRng) {
        self.entities.clear();
        self.entities.reserve(count);
        for _ in 0..count {
            self.entities.push(T::spawn(viewport, rng));
        }
    }

    /// Advance then render each entity in order
    pub fn step<S: Surface + ?Sized>(&mut self, frame: &Frame, rng: &mut SimRng, surface: &mut S) {
        for entity in &mut self.entities {
            entity.advance(frame, rng);
            entity.render(surface);
        }
    }
}

impl<T> Pool<T> {
    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.entities.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, T> {
        self.entities.iter_mut()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.entities
    }
}

impl<'a, T> IntoIterator for &'a Pool<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.entities.iter()
    }
}
