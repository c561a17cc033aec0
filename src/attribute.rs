use std::ops::{Index, IndexMut};

use strum::{Display, EnumCount, EnumString, VariantArray};

/// The hazards tracked in every room. Attributes never inform one another.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Ord, PartialOrd, VariantArray, EnumCount, Display, EnumString)]
#[strum(ascii_case_insensitive)]
pub enum Attribute {
    Pit,
    Arrow,
    Dragon,
}

impl Attribute {
    /// Single letter used by the text rendering.
    pub fn initial(&self) -> char {
        match self {
            Self::Pit => 'P',
            Self::Arrow => 'A',
            Self::Dragon => 'D',
        }
    }
}

/// One `T` for each [`Attribute`], indexed by attribute.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub struct PerAttribute<T>([T; Attribute::COUNT]);

impl<T> PerAttribute<T> {
    /// Build from a value per attribute, in [`Attribute::VARIANTS`] order.
    pub const fn new(values: [T; Attribute::COUNT]) -> Self {
        Self(values)
    }

    /// Pairs of attribute and value, in [`Attribute::VARIANTS`] order.
    pub fn iter(&self) -> impl Iterator<Item=(Attribute, &T)> {
        Attribute::VARIANTS.iter().copied().zip(self.0.iter())
    }

    /// Apply `f` to every value.
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> PerAttribute<U> {
        PerAttribute(self.0.map(f))
    }
}

impl<T: Copy> PerAttribute<T> {
    /// The same value for every attribute.
    pub fn splat(value: T) -> Self {
        Self([value; Attribute::COUNT])
    }
}

impl<T> From<[T; Attribute::COUNT]> for PerAttribute<T> {
    fn from(value: [T; Attribute::COUNT]) -> Self {
        Self(value)
    }
}

impl<T> Index<Attribute> for PerAttribute<T> {
    type Output = T;

    fn index(&self, index: Attribute) -> &Self::Output {
        &self.0[index as usize]
    }
}

impl<T> IndexMut<Attribute> for PerAttribute<T> {
    fn index_mut(&mut self, index: Attribute) -> &mut Self::Output {
        &mut self.0[index as usize]
    }
}

#[cfg(test)]
mod tests {
    use strum::VariantArray;

    use super::{Attribute, PerAttribute};

    #[test]
    fn indexes_by_attribute() {
        let mut flags = PerAttribute::new([true, false, false]);
        flags[Attribute::Dragon] = true;
        assert!(flags[Attribute::Pit]);
        assert!(!flags[Attribute::Arrow]);
        assert!(flags[Attribute::Dragon]);
        assert_eq!(flags.iter().filter(|(_, set)| **set).map(|(a, _)| a).collect::<Vec<_>>(), vec![Attribute::Pit, Attribute::Dragon]);
    }

    #[test]
    fn parses_case_insensitive() {
        assert_eq!("pit".parse::<Attribute>().unwrap(), Attribute::Pit);
        assert_eq!("DRAGON".parse::<Attribute>().unwrap(), Attribute::Dragon);
        assert!("wumpus".parse::<Attribute>().is_err());
        assert_eq!(Attribute::VARIANTS.iter().map(Attribute::initial).collect::<String>(), "PAD");
    }
}
