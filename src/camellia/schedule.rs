//! Camellia subkey materialization tables.
//!
//! Each entry names where one subkey pair is read from: a bank (`KL`,
//! `KR`, `KA` or `KB`, each a 128-bit quantity split across 4 host-order
//! words in [`super::core::CamelliaContext::k`]), a cyclic-left-shift
//! count in bits, and which 64-bit half of the rotated bank to take.
//! Two distinct tables exist because the 128-bit and 192/256-bit key
//! schedules draw on a different sequence of banks and shifts (RFC 3713
//! §2.2).

#[derive(Clone, Copy)]
pub(crate) enum Bank {
    Kl,
    Kr,
    Ka,
    Kb,
}

impl Bank {
    /// Word offset of this bank within the 16-word key-material buffer.
    pub(crate) fn offset(self) -> usize {
        match self {
            Bank::Kl => 0,
            Bank::Kr => 4,
            Bank::Ka => 8,
            Bank::Kb => 12,
        }
    }
}

pub(crate) struct SubkeySlot {
    /// Index into the output `ks` array where this pair of words lands.
    pub index: usize,
    pub bank: Bank,
    /// Cyclic-left-shift count, in bits.
    pub shift: u32,
    /// 0 for the low 64 bits of the rotated bank, 64 for the high 64 bits.
    pub half: u32,
}

const L: u32 = 0;
const R: u32 = 64;

/// Subkey schedule for 128-bit keys: 26 entries, 52 output words.
pub(crate) const KS1: [SubkeySlot; 26] = [
    SubkeySlot { index: 0, bank: Bank::Kl, shift: 0, half: L },   // kw1
    SubkeySlot { index: 2, bank: Bank::Kl, shift: 0, half: R },   // kw2
    SubkeySlot { index: 4, bank: Bank::Ka, shift: 0, half: L },   // k1
    SubkeySlot { index: 6, bank: Bank::Ka, shift: 0, half: R },   // k2
    SubkeySlot { index: 8, bank: Bank::Kl, shift: 15, half: L },  // k3
    SubkeySlot { index: 10, bank: Bank::Kl, shift: 15, half: R }, // k4
    SubkeySlot { index: 12, bank: Bank::Ka, shift: 15, half: L }, // k5
    SubkeySlot { index: 14, bank: Bank::Ka, shift: 15, half: R }, // k6
    SubkeySlot { index: 16, bank: Bank::Ka, shift: 30, half: L }, // ke1
    SubkeySlot { index: 18, bank: Bank::Ka, shift: 30, half: R }, // ke2
    SubkeySlot { index: 20, bank: Bank::Kl, shift: 45, half: L }, // k7
    SubkeySlot { index: 22, bank: Bank::Kl, shift: 45, half: R }, // k8
    SubkeySlot { index: 24, bank: Bank::Ka, shift: 45, half: L }, // k9
    SubkeySlot { index: 26, bank: Bank::Kl, shift: 60, half: R }, // k10
    SubkeySlot { index: 28, bank: Bank::Ka, shift: 60, half: L }, // k11
    SubkeySlot { index: 30, bank: Bank::Ka, shift: 60, half: R }, // k12
    SubkeySlot { index: 32, bank: Bank::Kl, shift: 77, half: L }, // ke3
    SubkeySlot { index: 34, bank: Bank::Kl, shift: 77, half: R }, // ke4
    SubkeySlot { index: 36, bank: Bank::Kl, shift: 94, half: L }, // k13
    SubkeySlot { index: 38, bank: Bank::Kl, shift: 94, half: R }, // k14
    SubkeySlot { index: 40, bank: Bank::Ka, shift: 94, half: L }, // k15
    SubkeySlot { index: 42, bank: Bank::Ka, shift: 94, half: R }, // k16
    SubkeySlot { index: 44, bank: Bank::Kl, shift: 111, half: L }, // k17
    SubkeySlot { index: 46, bank: Bank::Kl, shift: 111, half: R }, // k18
    SubkeySlot { index: 48, bank: Bank::Ka, shift: 111, half: L }, // kw3
    SubkeySlot { index: 50, bank: Bank::Ka, shift: 111, half: R }, // kw4
];

/// Subkey schedule for 192- and 256-bit keys: 34 entries, 68 output words.
pub(crate) const KS2: [SubkeySlot; 34] = [
    SubkeySlot { index: 0, bank: Bank::Kl, shift: 0, half: L },    // kw1
    SubkeySlot { index: 2, bank: Bank::Kl, shift: 0, half: R },    // kw2
    SubkeySlot { index: 4, bank: Bank::Kb, shift: 0, half: L },    // k1
    SubkeySlot { index: 6, bank: Bank::Kb, shift: 0, half: R },    // k2
    SubkeySlot { index: 8, bank: Bank::Kr, shift: 15, half: L },   // k3
    SubkeySlot { index: 10, bank: Bank::Kr, shift: 15, half: R },  // k4
    SubkeySlot { index: 12, bank: Bank::Ka, shift: 15, half: L },  // k5
    SubkeySlot { index: 14, bank: Bank::Ka, shift: 15, half: R },  // k6
    SubkeySlot { index: 16, bank: Bank::Kr, shift: 30, half: L },  // ke1
    SubkeySlot { index: 18, bank: Bank::Kr, shift: 30, half: R },  // ke2
    SubkeySlot { index: 20, bank: Bank::Kb, shift: 30, half: L },  // k7
    SubkeySlot { index: 22, bank: Bank::Kb, shift: 30, half: R },  // k8
    SubkeySlot { index: 24, bank: Bank::Kl, shift: 45, half: L },  // k9
    SubkeySlot { index: 26, bank: Bank::Kl, shift: 45, half: R },  // k10
    SubkeySlot { index: 28, bank: Bank::Ka, shift: 45, half: L },  // k11
    SubkeySlot { index: 30, bank: Bank::Ka, shift: 45, half: R },  // k12
    SubkeySlot { index: 32, bank: Bank::Kl, shift: 60, half: L },  // ke3
    SubkeySlot { index: 34, bank: Bank::Kl, shift: 60, half: R },  // ke4
    SubkeySlot { index: 36, bank: Bank::Kr, shift: 60, half: L },  // k13
    SubkeySlot { index: 38, bank: Bank::Kr, shift: 60, half: R },  // k14
    SubkeySlot { index: 40, bank: Bank::Kb, shift: 60, half: L },  // k15
    SubkeySlot { index: 42, bank: Bank::Kb, shift: 60, half: R },  // k16
    SubkeySlot { index: 44, bank: Bank::Kl, shift: 77, half: L },  // k17
    SubkeySlot { index: 46, bank: Bank::Kl, shift: 77, half: R },  // k18
    SubkeySlot { index: 48, bank: Bank::Ka, shift: 77, half: L },  // ke5
    SubkeySlot { index: 50, bank: Bank::Ka, shift: 77, half: R },  // ke6
    SubkeySlot { index: 52, bank: Bank::Kr, shift: 94, half: L },  // k19
    SubkeySlot { index: 54, bank: Bank::Kr, shift: 94, half: R },  // k20
    SubkeySlot { index: 56, bank: Bank::Ka, shift: 94, half: L },  // k21
    SubkeySlot { index: 58, bank: Bank::Ka, shift: 94, half: R },  // k22
    SubkeySlot { index: 60, bank: Bank::Kl, shift: 111, half: L }, // k23
    SubkeySlot { index: 62, bank: Bank::Kl, shift: 111, half: R }, // k24
    SubkeySlot { index: 64, bank: Bank::Kb, shift: 111, half: L }, // kw3
    SubkeySlot { index: 66, bank: Bank::Kb, shift: 111, half: R }, // kw4
];

/// Materialize one pair of subkey words for `slot`, treating the 4 words
/// of `bank` as a cyclic buffer rotated left by `slot.shift + slot.half`
/// bits.
fn subkey_pair(k: &[u32; 16], slot: &SubkeySlot) -> (u32, u32) {
    let bit_offset = slot.shift + slot.half;
    let n = (bit_offset / 32) as usize;
    let m = bit_offset % 32;
    let bank = &k[slot.bank.offset()..slot.bank.offset() + 4];

    if m == 0 {
        (bank[n % 4], bank[(n + 1) % 4])
    } else {
        let w0 = (bank[n % 4] << m) | (bank[(n + 1) % 4] >> (32 - m));
        let w1 = (bank[(n + 1) % 4] << m) | (bank[(n + 2) % 4] >> (32 - m));
        (w0, w1)
    }
}

/// Fill `ks` from `table`, reading key material out of `k`.
pub(crate) fn materialize_subkeys(k: &[u32; 16], table: &[SubkeySlot], ks: &mut [u32]) {
    for slot in table {
        let (w0, w1) = subkey_pair(k, slot);
        ks[slot.index] = w0;
        ks[slot.index + 1] = w1;
    }
}
