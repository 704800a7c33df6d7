/*!
An iterator to generate the luby sequence.

See <https://oeis.org/A182105> for details on the luby sequence.

The *i*th element of the sequence (from 0) is found as in MiniSAT: first the least complete binary tree with more than *i* nodes is found, and then the position of *i* in the tree is narrowed until *i* is the final node of a subtree.
The element is then 2 raised to the height of the subtree.
*/

/// Representation used for numbers in a luby sequence.
pub type LubyRepresentation = u32;

/// Foundation of the iterator.
#[derive(Default)]
pub struct Luby {
    /// The index of the next element of the sequence.
    index: u64,

    /// The most recent element of the sequence.
    current: LubyRepresentation,
}

impl Iterator for Luby {
    type Item = LubyRepresentation;

    fn next(&mut self) -> Option<Self::Item> {
        let element = Luby::element(self.index)?;
        self.index += 1;
        self.current = element;
        Some(element)
    }
}

impl Luby {
    /// The most recent element of the sequence, or zero if no element has been generated.
    pub fn current(&self) -> LubyRepresentation {
        self.current
    }

    /// The element of the sequence at `index`, if representable.
    pub fn element(index: u64) -> Option<LubyRepresentation> {
        let mut size: u64 = 1;
        let mut height: u32 = 0;

        while size < index + 1 {
            height += 1;
            size = size.checked_mul(2)?.checked_add(1)?;
        }

        let mut index = index;
        while size - 1 != index {
            size = (size - 1) >> 1;
            height -= 1;
            index %= size;
        }

        LubyRepresentation::checked_pow(2, height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // https://oeis.org/A182105
    const LUBY_SLICE: &[LubyRepresentation] = &[
        1, 1, 2, 1, 1, 2, 4, 1, 1, 2, 1, 1, 2, 4, 8, 1, 1, 2, 1, 1, 2, 4, 1, 1, 2, 1, 1, 2, 4, 8,
        16, 1, 1, 2, 1, 1, 2, 4, 1, 1, 2, 1, 1, 2, 4, 8, 1, 1, 2, 1, 1, 2, 4, 1, 1, 2, 1, 1, 2, 4,
        8, 16, 32, 1, 1, 2, 1, 1, 2, 4, 1, 1, 2, 1, 1, 2, 4, 8, 1, 1, 2, 1, 1, 2, 4, 1, 1, 2, 1, 1,
        2, 4, 8, 16, 1, 1, 2, 1, 1, 2, 4, 1, 1, 2, 1, 1, 2, 4, 8,
    ];

    #[test]
    fn luby() {
        let mut l = Luby::default();
        for known_value in LUBY_SLICE {
            let next = l.next();
            assert_eq!(next, Some(*known_value));
            assert_eq!(l.current(), *known_value);
        }
    }

    #[test]
    fn element_at_tree_ends() {
        assert_eq!(Luby::element(0), Some(1));
        assert_eq!(Luby::element(6), Some(4));
        assert_eq!(Luby::element(14), Some(8));
        assert_eq!(Luby::element(30), Some(16));
    }
}
