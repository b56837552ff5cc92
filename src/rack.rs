use std::collections::HashMap;
use std::fmt;
use std::ops::{Deref, DerefMut};

use crate::alphabet::{fold_case, Alphabet};
use crate::error::{Error, Result};

/// A tile taken from the rack
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tile {
    /// A real letter, by alphabet slot
    Letter(usize),
    Blank,
}

/// Multiset of available tiles: a histogram over the alphabet slots plus a
/// separate count of blanks.
pub struct Rack<'a, A: Alphabet + ?Sized> {
    alphabet: &'a A,
    /// Histogram count of each letter in the rack
    letters: Vec<u32>,
    /// Number of blanks in the rack
    n_blanks: u32,
}

impl<'a, A: Alphabet + ?Sized> Rack<'a, A> {
    pub fn empty(alphabet: &'a A) -> Self {
        Self {
            alphabet,
            letters: vec![0; alphabet.len()],
            n_blanks: 0,
        }
    }

    /// Builds a rack from letter counts. Blank symbols add to the blank count,
    /// non-positive counts are skipped, anything else must be a letter of the
    /// alphabet.
    pub fn from_counts<I>(alphabet: &'a A, counts: I) -> Result<Self>
    where
        I: IntoIterator<Item = (char, i64)>,
    {
        let mut rack = Self::empty(alphabet);
        for (c, count) in counts {
            if count <= 0 {
                continue;
            }
            let count = u32::try_from(count).unwrap_or(u32::MAX);
            let c = fold_case(c);
            if alphabet.is_blank(c) {
                rack.n_blanks = rack.n_blanks.saturating_add(count);
            } else {
                let slot = alphabet.slot_of(c).ok_or(Error::InvalidLetter(c))?;
                rack.letters[slot] = rack.letters[slot].saturating_add(count);
            }
        }
        Ok(rack)
    }

    /// Builds a rack from a string with one character per tile, eg. "KATT?"
    pub fn from_letters(alphabet: &'a A, letters: &str) -> Result<Self> {
        let mut tally: HashMap<char, i64> = HashMap::new();
        for c in letters.chars() {
            *tally.entry(fold_case(c)).or_insert(0) += 1;
        }
        Self::from_counts(alphabet, tally)
    }

    pub fn alphabet(&self) -> &'a A {
        self.alphabet
    }

    /// Number of tiles of the given letter. Unknown characters have none
    pub fn count_of(&self, letter: char) -> u32 {
        self.alphabet
            .slot_of(letter)
            .map_or(0, |slot| self.letters[slot])
    }

    pub fn blank_count(&self) -> u32 {
        self.n_blanks
    }

    /// The total number of remaining letters+blanks
    pub fn total(&self) -> u64 {
        self.letters.iter().map(|&n| n as u64).sum::<u64>() + self.n_blanks as u64
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }

    /// Letters with at least one tile, in alphabet order
    pub fn letters_present(&self) -> impl Iterator<Item = char> + '_ {
        self.alphabet
            .letters()
            .iter()
            .zip(self.letters.iter())
            .filter(|&(_, &count)| count > 0)
            .map(|(&c, _)| c)
    }

    /// Takes one tile of the letter if there is one left
    pub fn try_use_letter(&mut self, letter: char) -> bool {
        match self.alphabet.slot_of(letter) {
            Some(slot) if self.letters[slot] > 0 => {
                self.letters[slot] -= 1;
                true
            }
            _ => false,
        }
    }

    /// Puts back a tile taken with [`Rack::try_use_letter`]
    pub fn restore_letter(&mut self, letter: char) -> Result<()> {
        let slot = self
            .alphabet
            .slot_of(letter)
            .ok_or(Error::InvalidLetter(letter))?;
        self.restore_slot(slot);
        Ok(())
    }

    fn restore_slot(&mut self, slot: usize) {
        self.letters[slot] = self.letters[slot].saturating_add(1);
    }

    pub fn try_use_blank(&mut self) -> bool {
        if self.n_blanks > 0 {
            self.n_blanks -= 1;
            true
        } else {
            false
        }
    }

    pub fn restore_blank(&mut self) {
        self.n_blanks = self.n_blanks.saturating_add(1);
    }

    /// Takes a tile that can be played as `letter`. A real tile is always
    /// preferred, a blank is only used once the letter has run out. The tile
    /// goes back into the rack when the returned guard is dropped.
    pub fn take(&mut self, letter: char) -> Option<TakenTile<'_, 'a, A>> {
        let tile = match self.alphabet.slot_of(letter) {
            Some(slot) if self.try_use_letter(letter) => Tile::Letter(slot),
            _ if self.try_use_blank() => Tile::Blank,
            _ => return None,
        };
        Some(TakenTile { rack: self, tile })
    }
}

impl<'a, A: Alphabet + ?Sized> Clone for Rack<'a, A> {
    fn clone(&self) -> Self {
        Self {
            alphabet: self.alphabet,
            letters: self.letters.clone(),
            n_blanks: self.n_blanks,
        }
    }
}

impl<'a, A: Alphabet + ?Sized> PartialEq for Rack<'a, A> {
    fn eq(&self, other: &Self) -> bool {
        self.letters == other.letters && self.n_blanks == other.n_blanks
    }
}

impl<'a, A: Alphabet + ?Sized> fmt::Debug for Rack<'a, A> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let letters: Vec<(char, u32)> = self
            .alphabet
            .letters()
            .iter()
            .zip(self.letters.iter())
            .filter(|&(_, &n)| n > 0)
            .map(|(&c, &n)| (c, n))
            .collect();
        f.debug_struct("Rack")
            .field("letters", &letters)
            .field("n_blanks", &self.n_blanks)
            .finish()
    }
}

/// A tile on loan from a [`Rack`]. Derefs to the rack so the remaining tiles
/// can be used while this one is out, and returns the tile on drop.
pub struct TakenTile<'r, 'a, A: Alphabet + ?Sized> {
    rack: &'r mut Rack<'a, A>,
    tile: Tile,
}

impl<'r, 'a, A: Alphabet + ?Sized> TakenTile<'r, 'a, A> {
    pub fn tile(&self) -> Tile {
        self.tile
    }

    pub fn is_blank(&self) -> bool {
        self.tile == Tile::Blank
    }
}

impl<'r, 'a, A: Alphabet + ?Sized> Deref for TakenTile<'r, 'a, A> {
    type Target = Rack<'a, A>;

    fn deref(&self) -> &Self::Target {
        &*self.rack
    }
}

impl<'r, 'a, A: Alphabet + ?Sized> DerefMut for TakenTile<'r, 'a, A> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut *self.rack
    }
}

impl<'r, 'a, A: Alphabet + ?Sized> Drop for TakenTile<'r, 'a, A> {
    fn drop(&mut self) {
        match self.tile {
            Tile::Letter(slot) => self.rack.restore_slot(slot),
            Tile::Blank => self.rack.restore_blank(),
        }
    }
}
