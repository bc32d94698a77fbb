use alloc::vec::Vec;
use super::Storage;

impl<T> Storage for Vec<T> {
    type Key = usize;
    type Element = T;

    #[inline]
    fn add(&mut self, element: Self::Element) -> Self::Key {
        self.push(element);
        self.len() - 1
    }
    #[inline(always)]
    fn len(&self) -> usize {
        self.len()
    }
    #[inline(always)]
    fn with_capacity(capacity: usize) -> Self {
        Self::with_capacity(capacity)
    }
    #[inline(always)]
    fn get(&self, key: &Self::Key) -> Option<&Self::Element> {
        (**self).get(*key)
    }
    #[inline(always)]
    fn get_mut(&mut self, key: &Self::Key) -> Option<&mut Self::Element> {
        (**self).get_mut(*key)
    }

    #[inline(always)]
    fn contains_key(&self, key: &Self::Key) -> bool {
        *key < self.len()
    }
    #[inline(always)]
    fn new() -> Self {
        Self::new()
    }
    #[inline(always)]
    fn capacity(&self) -> usize {
        self.capacity()
    }
    #[inline(always)]
    fn reserve(&mut self, additional: usize) {
        self.reserve(additional)
    }
    #[inline(always)]
    fn shrink_to_fit(&mut self) {
        self.shrink_to_fit()
    }
}
