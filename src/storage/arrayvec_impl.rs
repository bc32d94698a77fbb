use arrayvec::{Array, ArrayVec};
use super::Storage;

impl<A> Storage for ArrayVec<A>
where A: Array,
{
    type Key = usize;
    type Element = A::Item;

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
        assert_eq!(
            capacity,
            A::CAPACITY,
            "specified capacity does not match the underlying array's size",
        );
        Self::new()
    }
    #[inline(always)]
    fn get(&self, key: &Self::Key) -> Option<&Self::Element> {
        self.as_slice().get(*key)
    }
    #[inline(always)]
    fn get_mut(&mut self, key: &Self::Key) -> Option<&mut Self::Element> {
        self.as_mut_slice().get_mut(*key)
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
        A::CAPACITY
    }
    #[inline(always)]
    fn reserve(&mut self, additional: usize) {
        if self.len() + additional > A::CAPACITY {
            unimplemented!("ArrayVec does not support allocating memory; if you need more nodes, use Vec instead")
        }
    }
}
