//! Static folding table
//!
//! Maps a single code point to its folded form: zero, one or two code points.
//! The table covers Latin-1 Supplement, Latin Extended-A/B, spacing modifier
//! letters, combining diacritics, Greek and Coptic, Latin Extended Additional,
//! Greek Extended, General Punctuation and the Latin ligatures of the
//! Alphabetic Presentation Forms block.
//!
//! Lookups are a binary search over a slice sorted by code point, so they are
//! allocation-free and can run concurrently from any number of threads.
//!
//! Deliberate omissions:
//! - thorn (`þ`/`Þ`), lowercase eth (`ð`), wynn and yogh keep their identity.
//!   Capital eth (`Ð`) does fold to `D`.
//! - `ﬃ` and `ﬄ` would expand to three characters and are left unfolded so the
//!   output never exceeds twice the input length.

use core::fmt;

/// Lowest code point with a table entry
pub const RANGE_START: char = '\u{00C0}';

/// Highest code point with a table entry
pub const RANGE_END: char = '\u{FB06}';

/// Folded output of a single code point
///
/// Holds up to two characters inline; an empty value means the input is
/// deleted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Folded {
    chars: [char; 2],
    len: u8,
}

impl Folded {
    /// Output that deletes the input character
    pub const EMPTY: Folded = Folded {
        chars: ['\0'; 2],
        len: 0,
    };

    /// Single character output
    pub const fn one(ch: char) -> Self {
        Self {
            chars: [ch, '\0'],
            len: 1,
        }
    }

    /// Two character output (ligature expansion)
    pub const fn two(first: char, second: char) -> Self {
        Self {
            chars: [first, second],
            len: 2,
        }
    }

    /// Number of output characters (0, 1 or 2)
    #[inline]
    pub const fn len(&self) -> usize {
        self.len as usize
    }

    /// Whether the input character is deleted
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Output characters
    #[inline]
    pub fn as_slice(&self) -> &[char] {
        &self.chars[..self.len()]
    }

    /// Number of UTF-8 bytes the output occupies
    #[inline]
    pub fn len_utf8(&self) -> usize {
        self.as_slice().iter().map(|c| c.len_utf8()).sum()
    }
}

impl fmt::Display for Folded {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for ch in self.as_slice() {
            write!(f, "{ch}")?;
        }
        Ok(())
    }
}

/// Check whether a character falls inside the span of table keys
///
/// Characters outside this span are always identity-mapped, which lets the
/// transducer skip the lookup entirely.
#[inline]
pub fn is_interesting(ch: char) -> bool {
    (RANGE_START..=RANGE_END).contains(&ch)
}

/// Look up the folded form of a character
///
/// Returns `None` when the character maps to itself.
#[inline]
pub fn fold_char(ch: char) -> Option<Folded> {
    if !is_interesting(ch) {
        return None;
    }
    FOLDING_TABLE
        .binary_search_by(|(key, _)| key.cmp(&ch))
        .ok()
        .map(|idx| FOLDING_TABLE[idx].1)
}

/// All table entries in code point order
pub fn entries() -> &'static [(char, Folded)] {
    FOLDING_TABLE
}

/// Sorted by code point; `fold_char` relies on it.
static FOLDING_TABLE: &[(char, Folded)] = &[
    ('\u{00C0}', Folded::one('A')), // LATIN CAPITAL LETTER A WITH GRAVE
    ('\u{00C1}', Folded::one('A')), // LATIN CAPITAL LETTER A WITH ACUTE
    ('\u{00C2}', Folded::one('A')), // LATIN CAPITAL LETTER A WITH CIRCUMFLEX
    ('\u{00C3}', Folded::one('A')), // LATIN CAPITAL LETTER A WITH TILDE
    ('\u{00C4}', Folded::one('A')), // LATIN CAPITAL LETTER A WITH DIAERESIS
    ('\u{00C5}', Folded::one('A')), // LATIN CAPITAL LETTER A WITH RING ABOVE
    ('\u{00C6}', Folded::two('A', 'e')), // LATIN CAPITAL LETTER AE
    ('\u{00C7}', Folded::one('C')), // LATIN CAPITAL LETTER C WITH CEDILLA
    ('\u{00C8}', Folded::one('E')), // LATIN CAPITAL LETTER E WITH GRAVE
    ('\u{00C9}', Folded::one('E')), // LATIN CAPITAL LETTER E WITH ACUTE
    ('\u{00CA}', Folded::one('E')), // LATIN CAPITAL LETTER E WITH CIRCUMFLEX
    ('\u{00CB}', Folded::one('E')), // LATIN CAPITAL LETTER E WITH DIAERESIS
    ('\u{00CC}', Folded::one('I')), // LATIN CAPITAL LETTER I WITH GRAVE
    ('\u{00CD}', Folded::one('I')), // LATIN CAPITAL LETTER I WITH ACUTE
    ('\u{00CE}', Folded::one('I')), // LATIN CAPITAL LETTER I WITH CIRCUMFLEX
    ('\u{00CF}', Folded::one('I')), // LATIN CAPITAL LETTER I WITH DIAERESIS
    ('\u{00D0}', Folded::one('D')), // LATIN CAPITAL LETTER ETH
    ('\u{00D1}', Folded::one('N')), // LATIN CAPITAL LETTER N WITH TILDE
    ('\u{00D2}', Folded::one('O')), // LATIN CAPITAL LETTER O WITH GRAVE
    ('\u{00D3}', Folded::one('O')), // LATIN CAPITAL LETTER O WITH ACUTE
    ('\u{00D4}', Folded::one('O')), // LATIN CAPITAL LETTER O WITH CIRCUMFLEX
    ('\u{00D5}', Folded::one('O')), // LATIN CAPITAL LETTER O WITH TILDE
    ('\u{00D6}', Folded::one('O')), // LATIN CAPITAL LETTER O WITH DIAERESIS
    ('\u{00D7}', Folded::one('x')), // MULTIPLICATION SIGN
    ('\u{00D8}', Folded::one('O')), // LATIN CAPITAL LETTER O WITH STROKE
    ('\u{00D9}', Folded::one('U')), // LATIN CAPITAL LETTER U WITH GRAVE
    ('\u{00DA}', Folded::one('U')), // LATIN CAPITAL LETTER U WITH ACUTE
    ('\u{00DB}', Folded::one('U')), // LATIN CAPITAL LETTER U WITH CIRCUMFLEX
    ('\u{00DC}', Folded::one('U')), // LATIN CAPITAL LETTER U WITH DIAERESIS
    ('\u{00DD}', Folded::one('Y')), // LATIN CAPITAL LETTER Y WITH ACUTE
    ('\u{00DF}', Folded::two('s', 's')), // LATIN SMALL LETTER SHARP S
    ('\u{00E0}', Folded::one('a')), // LATIN SMALL LETTER A WITH GRAVE
    ('\u{00E1}', Folded::one('a')), // LATIN SMALL LETTER A WITH ACUTE
    ('\u{00E2}', Folded::one('a')), // LATIN SMALL LETTER A WITH CIRCUMFLEX
    ('\u{00E3}', Folded::one('a')), // LATIN SMALL LETTER A WITH TILDE
    ('\u{00E4}', Folded::one('a')), // LATIN SMALL LETTER A WITH DIAERESIS
    ('\u{00E5}', Folded::one('a')), // LATIN SMALL LETTER A WITH RING ABOVE
    ('\u{00E6}', Folded::two('a', 'e')), // LATIN SMALL LETTER AE
    ('\u{00E7}', Folded::one('c')), // LATIN SMALL LETTER C WITH CEDILLA
    ('\u{00E8}', Folded::one('e')), // LATIN SMALL LETTER E WITH GRAVE
    ('\u{00E9}', Folded::one('e')), // LATIN SMALL LETTER E WITH ACUTE
    ('\u{00EA}', Folded::one('e')), // LATIN SMALL LETTER E WITH CIRCUMFLEX
    ('\u{00EB}', Folded::one('e')), // LATIN SMALL LETTER E WITH DIAERESIS
    ('\u{00EC}', Folded::one('i')), // LATIN SMALL LETTER I WITH GRAVE
    ('\u{00ED}', Folded::one('i')), // LATIN SMALL LETTER I WITH ACUTE
    ('\u{00EE}', Folded::one('i')), // LATIN SMALL LETTER I WITH CIRCUMFLEX
    ('\u{00EF}', Folded::one('i')), // LATIN SMALL LETTER I WITH DIAERESIS
    ('\u{00F1}', Folded::one('n')), // LATIN SMALL LETTER N WITH TILDE
    ('\u{00F2}', Folded::one('o')), // LATIN SMALL LETTER O WITH GRAVE
    ('\u{00F3}', Folded::one('o')), // LATIN SMALL LETTER O WITH ACUTE
    ('\u{00F4}', Folded::one('o')), // LATIN SMALL LETTER O WITH CIRCUMFLEX
    ('\u{00F5}', Folded::one('o')), // LATIN SMALL LETTER O WITH TILDE
    ('\u{00F6}', Folded::one('o')), // LATIN SMALL LETTER O WITH DIAERESIS
    ('\u{00F7}', Folded::one('/')), // DIVISION SIGN
    ('\u{00F8}', Folded::one('o')), // LATIN SMALL LETTER O WITH STROKE
    ('\u{00F9}', Folded::one('u')), // LATIN SMALL LETTER U WITH GRAVE
    ('\u{00FA}', Folded::one('u')), // LATIN SMALL LETTER U WITH ACUTE
    ('\u{00FB}', Folded::one('u')), // LATIN SMALL LETTER U WITH CIRCUMFLEX
    ('\u{00FC}', Folded::one('u')), // LATIN SMALL LETTER U WITH DIAERESIS
    ('\u{00FD}', Folded::one('y')), // LATIN SMALL LETTER Y WITH ACUTE
    ('\u{00FF}', Folded::one('y')), // LATIN SMALL LETTER Y WITH DIAERESIS
    ('\u{0100}', Folded::one('A')), // LATIN CAPITAL LETTER A WITH MACRON
    ('\u{0101}', Folded::one('a')), // LATIN SMALL LETTER A WITH MACRON
    ('\u{0103}', Folded::one('a')), // LATIN SMALL LETTER A WITH BREVE
    ('\u{010C}', Folded::one('C')), // LATIN CAPITAL LETTER C WITH CARON
    ('\u{010D}', Folded::one('c')), // LATIN SMALL LETTER C WITH CARON
    ('\u{010F}', Folded::one('d')), // LATIN SMALL LETTER D WITH CARON
    ('\u{0111}', Folded::one('d')), // LATIN SMALL LETTER D WITH STROKE
    ('\u{0113}', Folded::one('e')), // LATIN SMALL LETTER E WITH MACRON
    ('\u{0115}', Folded::one('e')), // LATIN SMALL LETTER E WITH BREVE
    ('\u{0119}', Folded::one('e')), // LATIN SMALL LETTER E WITH OGONEK
    ('\u{011B}', Folded::one('e')), // LATIN SMALL LETTER E WITH CARON
    ('\u{011D}', Folded::one('g')), // LATIN SMALL LETTER G WITH CIRCUMFLEX
    ('\u{0129}', Folded::one('i')), // LATIN SMALL LETTER I WITH TILDE
    ('\u{012A}', Folded::one('I')), // LATIN CAPITAL LETTER I WITH MACRON
    ('\u{012B}', Folded::one('i')), // LATIN SMALL LETTER I WITH MACRON
    ('\u{012C}', Folded::one('I')), // LATIN CAPITAL LETTER I WITH BREVE
    ('\u{012D}', Folded::one('i')), // LATIN SMALL LETTER I WITH BREVE
    ('\u{0132}', Folded::two('I', 'J')), // LATIN CAPITAL LIGATURE IJ
    ('\u{0133}', Folded::two('i', 'j')), // LATIN SMALL LIGATURE IJ
    ('\u{0142}', Folded::one('l')), // LATIN SMALL LETTER L WITH STROKE
    ('\u{0148}', Folded::one('n')), // LATIN SMALL LETTER N WITH CARON
    ('\u{014D}', Folded::one('o')), // LATIN SMALL LETTER O WITH MACRON
    ('\u{014F}', Folded::one('o')), // LATIN SMALL LETTER O WITH BREVE
    ('\u{0151}', Folded::one('o')), // LATIN SMALL LETTER O WITH DOUBLE ACUTE
    ('\u{0152}', Folded::two('O', 'e')), // LATIN CAPITAL LIGATURE OE
    ('\u{0153}', Folded::two('o', 'e')), // LATIN SMALL LIGATURE OE
    ('\u{0161}', Folded::one('s')), // LATIN SMALL LETTER S WITH CARON
    ('\u{0169}', Folded::one('u')), // LATIN SMALL LETTER U WITH TILDE
    ('\u{016A}', Folded::one('U')), // LATIN CAPITAL LETTER U WITH MACRON
    ('\u{016B}', Folded::one('u')), // LATIN SMALL LETTER U WITH MACRON
    ('\u{016D}', Folded::one('u')), // LATIN SMALL LETTER U WITH BREVE
    ('\u{0175}', Folded::one('w')), // LATIN SMALL LETTER W WITH CIRCUMFLEX
    ('\u{0178}', Folded::one('Y')), // LATIN CAPITAL LETTER Y WITH DIAERESIS
    ('\u{0179}', Folded::one('Z')), // LATIN CAPITAL LETTER Z WITH ACUTE
    ('\u{017A}', Folded::one('z')), // LATIN SMALL LETTER Z WITH ACUTE
    ('\u{017C}', Folded::one('z')), // LATIN SMALL LETTER Z WITH DOT ABOVE
    ('\u{017D}', Folded::one('Z')), // LATIN CAPITAL LETTER Z WITH CARON
    ('\u{017E}', Folded::one('z')), // LATIN SMALL LETTER Z WITH CARON
    ('\u{01CE}', Folded::one('a')), // LATIN SMALL LETTER A WITH CARON
    ('\u{01D0}', Folded::one('i')), // LATIN SMALL LETTER I WITH CARON
    ('\u{01E3}', Folded::two('a', 'e')), // LATIN SMALL LETTER AE WITH MACRON
    ('\u{01EB}', Folded::one('o')), // LATIN SMALL LETTER O WITH OGONEK
    ('\u{01FD}', Folded::two('a', 'e')), // LATIN SMALL LETTER AE WITH ACUTE
    ('\u{0203}', Folded::one('a')), // LATIN SMALL LETTER A WITH INVERTED BREVE
    ('\u{0208}', Folded::one('I')), // LATIN CAPITAL LETTER I WITH DOUBLE GRAVE
    ('\u{0217}', Folded::one('u')), // LATIN SMALL LETTER U WITH INVERTED BREVE
    ('\u{0233}', Folded::one('y')), // LATIN SMALL LETTER Y WITH MACRON
    ('\u{0237}', Folded::one('j')), // LATIN SMALL LETTER DOTLESS J
    ('\u{02B9}', Folded::EMPTY), // MODIFIER LETTER PRIME
    ('\u{02BC}', Folded::EMPTY), // MODIFIER LETTER APOSTROPHE
    ('\u{02BF}', Folded::EMPTY), // MODIFIER LETTER LEFT HALF RING
    ('\u{02C8}', Folded::EMPTY), // MODIFIER LETTER VERTICAL LINE
    ('\u{02C9}', Folded::EMPTY), // MODIFIER LETTER MACRON
    ('\u{02D8}', Folded::EMPTY), // BREVE
    ('\u{0301}', Folded::EMPTY), // COMBINING ACUTE ACCENT
    ('\u{0302}', Folded::EMPTY), // COMBINING CIRCUMFLEX ACCENT
    ('\u{0303}', Folded::EMPTY), // COMBINING TILDE
    ('\u{0304}', Folded::EMPTY), // COMBINING MACRON
    ('\u{0305}', Folded::EMPTY), // COMBINING OVERLINE
    ('\u{0306}', Folded::EMPTY), // COMBINING BREVE
    ('\u{0307}', Folded::EMPTY), // COMBINING DOT ABOVE
    ('\u{0313}', Folded::EMPTY), // COMBINING COMMA ABOVE
    ('\u{0314}', Folded::EMPTY), // COMBINING REVERSED COMMA ABOVE
    ('\u{0323}', Folded::EMPTY), // COMBINING DOT BELOW
    ('\u{0342}', Folded::EMPTY), // COMBINING GREEK PERISPOMENI
    ('\u{0345}', Folded::EMPTY), // COMBINING GREEK YPOGEGRAMMENI
    ('\u{035E}', Folded::EMPTY), // COMBINING DOUBLE MACRON
    ('\u{0375}', Folded::EMPTY), // GREEK LOWER NUMERAL SIGN
    ('\u{0390}', Folded::one('ι')), // GREEK SMALL LETTER IOTA WITH DIALYTIKA AND TONOS
    ('\u{03AC}', Folded::one('α')), // GREEK SMALL LETTER ALPHA WITH TONOS
    ('\u{03AD}', Folded::one('ε')), // GREEK SMALL LETTER EPSILON WITH TONOS
    ('\u{03AE}', Folded::one('η')), // GREEK SMALL LETTER ETA WITH TONOS
    ('\u{03AF}', Folded::one('ι')), // GREEK SMALL LETTER IOTA WITH TONOS
    ('\u{03CA}', Folded::one('ι')), // GREEK SMALL LETTER IOTA WITH DIALYTIKA
    ('\u{03CB}', Folded::one('υ')), // GREEK SMALL LETTER UPSILON WITH DIALYTIKA
    ('\u{03CC}', Folded::one('ο')), // GREEK SMALL LETTER OMICRON WITH TONOS
    ('\u{03CD}', Folded::one('υ')), // GREEK SMALL LETTER UPSILON WITH TONOS
    ('\u{03CE}', Folded::one('ω')), // GREEK SMALL LETTER OMEGA WITH TONOS
    ('\u{03D5}', Folded::one('φ')), // GREEK PHI SYMBOL
    ('\u{1E0D}', Folded::one('d')), // LATIN SMALL LETTER D WITH DOT BELOW
    ('\u{1E24}', Folded::one('H')), // LATIN CAPITAL LETTER H WITH DOT BELOW
    ('\u{1E25}', Folded::one('h')), // LATIN SMALL LETTER H WITH DOT BELOW
    ('\u{1E35}', Folded::one('k')), // LATIN SMALL LETTER K WITH LINE BELOW
    ('\u{1E37}', Folded::one('l')), // LATIN SMALL LETTER L WITH DOT BELOW
    ('\u{1E61}', Folded::one('s')), // LATIN SMALL LETTER S WITH DOT ABOVE
    ('\u{1E63}', Folded::one('s')), // LATIN SMALL LETTER S WITH DOT BELOW
    ('\u{1E6D}', Folded::one('t')), // LATIN SMALL LETTER T WITH DOT BELOW
    ('\u{1EA1}', Folded::one('a')), // LATIN SMALL LETTER A WITH DOT BELOW
    ('\u{1F00}', Folded::one('α')), // GREEK SMALL LETTER ALPHA WITH PSILI
    ('\u{1F01}', Folded::one('α')), // GREEK SMALL LETTER ALPHA WITH DASIA
    ('\u{1F03}', Folded::one('α')), // GREEK SMALL LETTER ALPHA WITH DASIA AND VARIA
    ('\u{1F04}', Folded::one('α')), // GREEK SMALL LETTER ALPHA WITH PSILI AND OXIA
    ('\u{1F05}', Folded::one('α')), // GREEK SMALL LETTER ALPHA WITH DASIA AND OXIA
    ('\u{1F08}', Folded::one('Α')), // GREEK CAPITAL LETTER ALPHA WITH PSILI
    ('\u{1F0C}', Folded::one('Α')), // GREEK CAPITAL LETTER ALPHA WITH PSILI AND OXIA
    ('\u{1F10}', Folded::one('ε')), // GREEK SMALL LETTER EPSILON WITH PSILI
    ('\u{1F11}', Folded::one('ε')), // GREEK SMALL LETTER EPSILON WITH DASIA
    ('\u{1F13}', Folded::one('ε')), // GREEK SMALL LETTER EPSILON WITH DASIA AND VARIA
    ('\u{1F14}', Folded::one('ε')), // GREEK SMALL LETTER EPSILON WITH PSILI AND OXIA
    ('\u{1F15}', Folded::one('ε')), // GREEK SMALL LETTER EPSILON WITH DASIA AND OXIA
    ('\u{1F18}', Folded::one('Ε')), // GREEK CAPITAL LETTER EPSILON WITH PSILI
    ('\u{1F20}', Folded::one('η')), // GREEK SMALL LETTER ETA WITH PSILI
    ('\u{1F21}', Folded::one('η')), // GREEK SMALL LETTER ETA WITH DASIA
    ('\u{1F22}', Folded::one('η')), // GREEK SMALL LETTER ETA WITH PSILI AND VARIA
    ('\u{1F24}', Folded::one('η')), // GREEK SMALL LETTER ETA WITH PSILI AND OXIA
    ('\u{1F25}', Folded::one('η')), // GREEK SMALL LETTER ETA WITH DASIA AND OXIA
    ('\u{1F26}', Folded::one('η')), // GREEK SMALL LETTER ETA WITH PSILI AND PERISPOMENI
    ('\u{1F27}', Folded::one('η')), // GREEK SMALL LETTER ETA WITH DASIA AND PERISPOMENI
    ('\u{1F29}', Folded::one('Η')), // GREEK CAPITAL LETTER ETA WITH DASIA
    ('\u{1F30}', Folded::one('ι')), // GREEK SMALL LETTER IOTA WITH PSILI
    ('\u{1F31}', Folded::one('ι')), // GREEK SMALL LETTER IOTA WITH DASIA
    ('\u{1F32}', Folded::one('ι')), // GREEK SMALL LETTER IOTA WITH PSILI AND VARIA
    ('\u{1F34}', Folded::one('ι')), // GREEK SMALL LETTER IOTA WITH PSILI AND OXIA
    ('\u{1F35}', Folded::one('ι')), // GREEK SMALL LETTER IOTA WITH DASIA AND OXIA
    ('\u{1F36}', Folded::one('ι')), // GREEK SMALL LETTER IOTA WITH PSILI AND PERISPOMENI
    ('\u{1F37}', Folded::one('ι')), // GREEK SMALL LETTER IOTA WITH DASIA AND PERISPOMENI
    ('\u{1F38}', Folded::one('Ι')), // GREEK CAPITAL LETTER IOTA WITH PSILI
    ('\u{1F39}', Folded::one('Ι')), // GREEK CAPITAL LETTER IOTA WITH DASIA
    ('\u{1F40}', Folded::one('ο')), // GREEK SMALL LETTER OMICRON WITH PSILI
    ('\u{1F41}', Folded::one('ο')), // GREEK SMALL LETTER OMICRON WITH DASIA
    ('\u{1F42}', Folded::one('ο')), // GREEK SMALL LETTER OMICRON WITH PSILI AND VARIA
    ('\u{1F44}', Folded::one('ο')), // GREEK SMALL LETTER OMICRON WITH PSILI AND OXIA
    ('\u{1F45}', Folded::one('ο')), // GREEK SMALL LETTER OMICRON WITH DASIA AND OXIA
    ('\u{1F50}', Folded::one('υ')), // GREEK SMALL LETTER UPSILON WITH PSILI
    ('\u{1F51}', Folded::one('υ')), // GREEK SMALL LETTER UPSILON WITH DASIA
    ('\u{1F52}', Folded::one('υ')), // GREEK SMALL LETTER UPSILON WITH PSILI AND VARIA
    ('\u{1F53}', Folded::one('υ')), // GREEK SMALL LETTER UPSILON WITH DASIA AND VARIA
    ('\u{1F54}', Folded::one('υ')), // GREEK SMALL LETTER UPSILON WITH PSILI AND OXIA
    ('\u{1F55}', Folded::one('υ')), // GREEK SMALL LETTER UPSILON WITH DASIA AND OXIA
    ('\u{1F56}', Folded::one('υ')), // GREEK SMALL LETTER UPSILON WITH PSILI AND PERISPOMENI
    ('\u{1F59}', Folded::one('Υ')), // GREEK CAPITAL LETTER UPSILON WITH DASIA
    ('\u{1F60}', Folded::one('ω')), // GREEK SMALL LETTER OMEGA WITH PSILI
    ('\u{1F61}', Folded::one('ω')), // GREEK SMALL LETTER OMEGA WITH DASIA
    ('\u{1F64}', Folded::one('ω')), // GREEK SMALL LETTER OMEGA WITH PSILI AND OXIA
    ('\u{1F65}', Folded::one('ω')), // GREEK SMALL LETTER OMEGA WITH DASIA AND OXIA
    ('\u{1F66}', Folded::one('ω')), // GREEK SMALL LETTER OMEGA WITH PSILI AND PERISPOMENI
    ('\u{1F70}', Folded::one('α')), // GREEK SMALL LETTER ALPHA WITH VARIA
    ('\u{1F72}', Folded::one('ε')), // GREEK SMALL LETTER EPSILON WITH VARIA
    ('\u{1F74}', Folded::one('η')), // GREEK SMALL LETTER ETA WITH VARIA
    ('\u{1F76}', Folded::one('ι')), // GREEK SMALL LETTER IOTA WITH VARIA
    ('\u{1F78}', Folded::one('ο')), // GREEK SMALL LETTER OMICRON WITH VARIA
    ('\u{1F7A}', Folded::one('υ')), // GREEK SMALL LETTER UPSILON WITH VARIA
    ('\u{1F7C}', Folded::one('ω')), // GREEK SMALL LETTER OMEGA WITH VARIA
    ('\u{1F85}', Folded::one('α')), // GREEK SMALL LETTER ALPHA WITH DASIA AND OXIA AND YPOGEGRAMMENI
    ('\u{1FA0}', Folded::one('ω')), // GREEK SMALL LETTER OMEGA WITH PSILI AND YPOGEGRAMMENI
    ('\u{1FB1}', Folded::one('α')), // GREEK SMALL LETTER ALPHA WITH MACRON
    ('\u{1FB3}', Folded::one('α')), // GREEK SMALL LETTER ALPHA WITH YPOGEGRAMMENI
    ('\u{1FB4}', Folded::one('α')), // GREEK SMALL LETTER ALPHA WITH OXIA AND YPOGEGRAMMENI
    ('\u{1FB6}', Folded::one('α')), // GREEK SMALL LETTER ALPHA WITH PERISPOMENI
    ('\u{1FBD}', Folded::EMPTY), // GREEK KORONIS
    ('\u{1FC3}', Folded::one('η')), // GREEK SMALL LETTER ETA WITH YPOGEGRAMMENI
    ('\u{1FC4}', Folded::one('η')), // GREEK SMALL LETTER ETA WITH OXIA AND YPOGEGRAMMENI
    ('\u{1FC6}', Folded::one('η')), // GREEK SMALL LETTER ETA WITH PERISPOMENI
    ('\u{1FC7}', Folded::one('η')), // GREEK SMALL LETTER ETA WITH PERISPOMENI AND YPOGEGRAMMENI
    ('\u{1FD0}', Folded::one('ι')), // GREEK SMALL LETTER IOTA WITH VRACHY
    ('\u{1FD6}', Folded::one('ι')), // GREEK SMALL LETTER IOTA WITH PERISPOMENI
    ('\u{1FE0}', Folded::one('υ')), // GREEK SMALL LETTER UPSILON WITH VRACHY
    ('\u{1FE1}', Folded::one('υ')), // GREEK SMALL LETTER UPSILON WITH MACRON
    ('\u{1FE4}', Folded::one('ρ')), // GREEK SMALL LETTER RHO WITH PSILI
    ('\u{1FE5}', Folded::one('ρ')), // GREEK SMALL LETTER RHO WITH DASIA
    ('\u{1FE6}', Folded::one('υ')), // GREEK SMALL LETTER UPSILON WITH PERISPOMENI
    ('\u{1FEC}', Folded::one('Ρ')), // GREEK CAPITAL LETTER RHO WITH DASIA
    ('\u{1FF3}', Folded::one('ω')), // GREEK SMALL LETTER OMEGA WITH YPOGEGRAMMENI
    ('\u{1FF4}', Folded::one('ω')), // GREEK SMALL LETTER OMEGA WITH OXIA AND YPOGEGRAMMENI
    ('\u{1FF6}', Folded::one('ω')), // GREEK SMALL LETTER OMEGA WITH PERISPOMENI
    ('\u{1FF7}', Folded::one('ω')), // GREEK SMALL LETTER OMEGA WITH PERISPOMENI AND YPOGEGRAMMENI
    ('\u{200A}', Folded::one(' ')), // HAIR SPACE
    ('\u{2012}', Folded::one('-')), // FIGURE DASH
    ('\u{2013}', Folded::one('-')), // EN DASH
    ('\u{2014}', Folded::one('-')), // EM DASH
    ('\u{2018}', Folded::one('\'')), // LEFT SINGLE QUOTATION MARK
    ('\u{2019}', Folded::one('\'')), // RIGHT SINGLE QUOTATION MARK
    ('\u{201B}', Folded::one('\'')), // SINGLE HIGH-REVERSED-9 QUOTATION MARK
    ('\u{201C}', Folded::one('"')), // LEFT DOUBLE QUOTATION MARK
    ('\u{201D}', Folded::one('"')), // RIGHT DOUBLE QUOTATION MARK
    ('\u{2025}', Folded::one(' ')), // TWO DOT LEADER
    ('\u{2026}', Folded::one(' ')), // HORIZONTAL ELLIPSIS
    ('\u{FB00}', Folded::two('f', 'f')), // LATIN SMALL LIGATURE FF
    ('\u{FB01}', Folded::two('f', 'i')), // LATIN SMALL LIGATURE FI
    ('\u{FB02}', Folded::two('f', 'l')), // LATIN SMALL LIGATURE FL
    ('\u{FB05}', Folded::two('f', 't')), // LATIN SMALL LIGATURE LONG S T
    ('\u{FB06}', Folded::two('s', 't')), // LATIN SMALL LIGATURE ST
];
