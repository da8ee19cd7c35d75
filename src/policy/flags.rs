use std::{fmt, marker::PhantomData};

/// A single detector or penalty bit of a policy scope
pub trait Flag: Copy + Eq + fmt::Debug + 'static {
    /// Every flag of this kind, in canonical order
    const ALL: &'static [Self];

    fn bit(self) -> u16;

    /// Stable snake_case name used in logs and CLI output
    fn name(self) -> &'static str;
}

/// Immutable set of flags of one kind
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct FlagSet<F> {
    bits: u16,
    _kind: PhantomData<F>,
}

impl<F: Flag> FlagSet<F> {
    pub const fn empty() -> Self {
        Self {
            bits: 0,
            _kind: PhantomData,
        }
    }

    pub fn all() -> Self {
        F::ALL.iter().fold(Self::empty(), |set, flag| set.with(*flag))
    }

    /// Return a copy with `flag` added
    pub fn with(self, flag: F) -> Self {
        Self {
            bits: self.bits | flag.bit(),
            _kind: PhantomData,
        }
    }

    /// Return a copy with `flag` removed
    pub fn without(self, flag: F) -> Self {
        Self {
            bits: self.bits & !flag.bit(),
            _kind: PhantomData,
        }
    }

    pub fn contains(&self, flag: F) -> bool {
        self.bits & flag.bit() != 0
    }

    pub fn is_empty(&self) -> bool {
        self.bits == 0
    }

    pub fn len(&self) -> usize {
        self.bits.count_ones() as usize
    }

    pub fn iter(&self) -> impl Iterator<Item = F> + '_ {
        F::ALL.iter().copied().filter(move |flag| self.contains(*flag))
    }
}

impl<F: Flag> Default for FlagSet<F> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<F: Flag> FromIterator<F> for FlagSet<F> {
    fn from_iter<I: IntoIterator<Item = F>>(iter: I) -> Self {
        iter.into_iter().fold(Self::empty(), Self::with)
    }
}

impl<F: Flag> fmt::Debug for FlagSet<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<F: Flag> fmt::Display for FlagSet<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("none");
        }
        for (i, flag) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            f.write_str(flag.name())?;
        }
        Ok(())
    }
}
