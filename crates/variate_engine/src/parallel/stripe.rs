//! Strided mutable views over one shared output buffer.
//!
//! `split_stripes(buffer, w)` carves a buffer into `w` interleaved stripes:
//! stripe `k` owns exactly the indices `k, k + w, k + 2w, ...`. The stripes
//! are pairwise disjoint and jointly cover the buffer, so `w` workers can
//! fill them concurrently without locks and without leaving any slot
//! unwritten or written twice.

use std::marker::PhantomData;

/// Mutable view over every `stride`-th element of a buffer, starting at a
/// fixed offset.
///
/// A stripe borrows the buffer for its lifetime; the buffer cannot be read
/// or resized until every stripe from the split has been dropped.
#[derive(Debug)]
pub(crate) struct StripeMut<'a, T> {
    /// First element owned by this stripe.
    head: *mut T,
    /// Number of elements owned by this stripe.
    len: usize,
    /// Distance between consecutive owned elements.
    stride: usize,
    /// Ties the raw view to the buffer borrow.
    _buffer: PhantomData<&'a mut [T]>,
}

// Safety: a stripe dereferences only its own strided elements, and stripes
// from one split never overlap, so moving a stripe to another thread moves
// exclusive access to disjoint slots.
unsafe impl<T: Send> Send for StripeMut<'_, T> {}

impl<T> StripeMut<'_, T> {
    /// Returns the number of elements this stripe owns.
    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.len
    }

    /// Writes `draw()` into each owned slot, in ascending index order.
    pub(crate) fn fill_with(&mut self, mut draw: impl FnMut() -> T) {
        for i in 0..self.len {
            // Safety: slot i of this stripe is buffer index
            // offset + i * stride, which is in bounds for i < len and owned
            // by this stripe alone.
            unsafe {
                *self.head.add(i * self.stride) = draw();
            }
        }
    }
}

/// Splits `buffer` into `count` interleaved stripes.
///
/// Stripe `k` starts at index `k` and steps by `count`. With `len` elements
/// the first `len % count` stripes hold `len / count + 1` elements and the
/// rest hold `len / count`; stripes past the buffer end are empty.
pub(crate) fn split_stripes<T>(buffer: &mut [T], count: usize) -> Vec<StripeMut<'_, T>> {
    debug_assert!(count > 0, "stripe count must be positive");
    let len = buffer.len();
    let base = buffer.as_mut_ptr();
    let stripes: Vec<StripeMut<'_, T>> = (0..count)
        .map(|offset| StripeMut {
            // Safety: offset is clamped to len, so the pointer stays inside
            // the buffer or one past its end. An empty stripe never
            // dereferences it.
            head: unsafe { base.add(offset.min(len)) },
            len: if offset < len {
                (len - offset).div_ceil(count)
            } else {
                0
            },
            stride: count,
            _buffer: PhantomData,
        })
        .collect();
    debug_assert_eq!(
        stripes.iter().map(StripeMut::len).sum::<usize>(),
        len,
        "stripes must jointly cover the buffer"
    );
    stripes
}
