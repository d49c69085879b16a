use alloc::vec;
use alloc::vec::Vec;
use core::fmt::Debug;
use core::hash::BuildHasher;
use core::hash::Hash;
use core::hash::Hasher;
use core::mem;

use foldhash::fast::FixedState;

/// Default number of slots for maps created via [`LongMap::new`].
const DEFAULT_CAPACITY: usize = 8;

/// Default load factor.
///
/// Growth triggers when live entries plus tombstones would exceed
/// `capacity * load_factor`. 0.5 keeps probe chains short for a linear-probe
/// table at the cost of memory.
const DEFAULT_LOAD_FACTOR: f32 = 0.5;

/// Smallest slot count the table will allocate.
const MIN_CAPACITY: usize = 2;

/// Per-slot marker.
///
/// `Removed` is a tombstone: it keeps probe chains intact for lookups but is
/// reused first-fit on insertion. A dedicated marker (rather than a reserved
/// key value) keeps the full 64-bit key space usable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum SlotState {
    Empty,
    Occupied,
    Removed,
}

/// Avalanche the raw key bits before masking.
///
/// Murmur3's 64-bit finalizer. Sequential keys would otherwise cluster into
/// adjacent slots and degrade linear probing; the mixer spreads every input
/// bit across the output, and treats the key as a raw bit pattern so negative
/// keys need no special handling.
#[inline(always)]
fn mix(key: i64) -> u64 {
    let mut hash = key as u64;
    hash ^= hash >> 33;
    hash = hash.wrapping_mul(0xff51_afd7_ed55_8ccd);
    hash ^= hash >> 33;
    hash = hash.wrapping_mul(0xc4ce_b9fe_1a85_ec53);
    hash ^ (hash >> 33)
}

/// Round a capacity hint up to the table's actual slot count.
#[inline]
fn table_capacity(hint: usize) -> usize {
    hint.max(MIN_CAPACITY)
        .checked_next_power_of_two()
        .expect("capacity overflow")
}

/// Occupancy threshold (live + tombstones) that triggers a rehash.
///
/// Clamped to `capacity - 1` so at least one `Empty` slot always survives and
/// every probe terminates, even at load factor 1.0.
#[inline]
fn max_occupancy(capacity: usize, load_factor: f32) -> usize {
    ((capacity as f64 * load_factor as f64) as usize).clamp(1, capacity - 1)
}

/// Result of probing for an insertion position.
enum RawSlot {
    /// The key is already present at this slot.
    Existing(usize),
    /// The key is absent; this tombstone is the first-fit insertion target.
    Reusable(usize),
    /// The key is absent; this `Empty` slot ended the probe.
    Free(usize),
}

/// A hash map from `i64` keys to values of type `V`.
///
/// Keys are stored unboxed in a flat array and resolved with open
/// addressing: linear probing over a power-of-two slot array, with
/// tombstone-marked deletions. See the crate docs for the full design notes.
///
/// Two maps compare equal iff they contain the same set of `(key, value)`
/// pairs, regardless of insertion order, intermediate removals, or capacity,
/// and equal maps produce equal hashes.
///
/// ## Example
///
/// ```rust
/// use long_map::LongMap;
///
/// let mut map = LongMap::new();
/// assert_eq!(map.put(1, "one"), None);
/// assert_eq!(map.put(1, "uno"), Some("one"));
/// assert_eq!(map.get(1), Some(&"uno"));
/// assert_eq!(map.remove(2), None);
/// ```
#[derive(Clone)]
pub struct LongMap<V> {
    states: Vec<SlotState>,
    keys: Vec<i64>,
    values: Vec<Option<V>>,
    mask: usize,
    occupied: usize,
    tombstones: usize,
    max_occupancy: usize,
    load_factor: f32,
}

impl<V> LongMap<V> {
    /// Creates an empty map with the default capacity and load factor.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use long_map::LongMap;
    ///
    /// let map: LongMap<&str> = LongMap::new();
    /// assert!(map.is_empty());
    /// ```
    pub fn new() -> Self {
        Self::with_capacity_and_load_factor(DEFAULT_CAPACITY, DEFAULT_LOAD_FACTOR)
    }

    /// Creates an empty map with at least `capacity` slots and the default
    /// load factor.
    ///
    /// The slot count is rounded up to the next power of two.
    ///
    /// # Panics
    ///
    /// Panics if the rounded-up slot count overflows `usize`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use long_map::LongMap;
    ///
    /// let map: LongMap<&str> = LongMap::with_capacity(100);
    /// assert_eq!(map.capacity(), 128);
    /// ```
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_capacity_and_load_factor(capacity, DEFAULT_LOAD_FACTOR)
    }

    /// Creates an empty map with at least `capacity` slots and the given
    /// load factor.
    ///
    /// The table grows when live entries plus tombstones would exceed
    /// `capacity * load_factor`; the threshold is capped at `capacity - 1`
    /// so one empty slot always remains to terminate probes.
    ///
    /// # Panics
    ///
    /// Panics if `load_factor` is not in `(0, 1]`, or if the rounded-up slot
    /// count overflows `usize`.
    pub fn with_capacity_and_load_factor(capacity: usize, load_factor: f32) -> Self {
        assert!(
            load_factor > 0.0 && load_factor <= 1.0,
            "load factor must be in (0, 1]"
        );
        let capacity = table_capacity(capacity);
        let mut values = Vec::with_capacity(capacity);
        values.resize_with(capacity, || None);
        Self {
            states: vec![SlotState::Empty; capacity],
            keys: vec![0; capacity],
            values,
            mask: capacity - 1,
            occupied: 0,
            tombstones: 0,
            max_occupancy: max_occupancy(capacity, load_factor),
            load_factor,
        }
    }

    /// Returns the number of live entries in the map.
    pub fn len(&self) -> usize {
        self.occupied
    }

    /// Returns `true` if the map contains no live entries.
    pub fn is_empty(&self) -> bool {
        self.occupied == 0
    }

    /// Returns the current slot count. Always a power of two.
    pub fn capacity(&self) -> usize {
        self.states.len()
    }

    /// Inserts a key-value pair, returning the previous value if the key was
    /// already present.
    ///
    /// Replacing the value of an existing key never grows the table.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use long_map::LongMap;
    ///
    /// let mut map = LongMap::new();
    /// assert_eq!(map.put(-3, 30), None);
    /// assert_eq!(map.put(-3, 31), Some(30));
    /// assert_eq!(map.len(), 1);
    /// ```
    pub fn put(&mut self, key: i64, value: V) -> Option<V> {
        self.put_slot(key, value).1
    }

    /// Returns a reference to the value for `key`, if present.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use long_map::LongMap;
    ///
    /// let mut map = LongMap::new();
    /// map.put(7, "seven");
    /// assert_eq!(map.get(7), Some(&"seven"));
    /// assert_eq!(map.get(8), None);
    /// ```
    pub fn get(&self, key: i64) -> Option<&V> {
        self.values[self.find(key)?].as_ref()
    }

    /// Returns a mutable reference to the value for `key`, if present.
    pub fn get_mut(&mut self, key: i64) -> Option<&mut V> {
        let index = self.find(key)?;
        self.values[index].as_mut()
    }

    /// Removes `key` from the map, returning its value if it was present.
    ///
    /// The slot is tombstone-marked rather than emptied, preserving probe
    /// chains for other keys until the next rehash purges it.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use long_map::LongMap;
    ///
    /// let mut map = LongMap::new();
    /// map.put(1, "one");
    /// assert_eq!(map.remove(1), Some("one"));
    /// assert_eq!(map.remove(1), None);
    /// ```
    pub fn remove(&mut self, key: i64) -> Option<V> {
        let index = self.find(key)?;
        self.remove_at(index)
    }

    /// Returns `true` if the map contains `key`.
    pub fn contains_key(&self, key: i64) -> bool {
        self.find(key).is_some()
    }

    /// Returns `true` if any live entry's value equals `value`.
    ///
    /// Values are not indexed, so this scans every occupied slot: O(capacity).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use long_map::LongMap;
    ///
    /// let mut map = LongMap::new();
    /// map.put(1, Some("a"));
    /// map.put(2, None);
    /// assert!(map.contains_value(&None));
    /// assert!(!map.contains_value(&Some("b")));
    /// ```
    pub fn contains_value(&self, value: &V) -> bool
    where
        V: PartialEq,
    {
        self.iter().any(|(_, candidate)| candidate == value)
    }

    /// Removes all entries, keeping the allocated capacity.
    pub fn clear(&mut self) {
        for state in &mut self.states {
            *state = SlotState::Empty;
        }
        for value in &mut self.values {
            *value = None;
        }
        self.occupied = 0;
        self.tombstones = 0;
    }

    /// Copies every entry of `other` into this map, replacing values for
    /// keys present in both.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use long_map::LongMap;
    ///
    /// let mut a = LongMap::new();
    /// a.put(1, "one");
    /// let mut b = LongMap::new();
    /// b.put(2, "two");
    /// a.put_all(&b);
    /// assert_eq!(a.len(), 2);
    /// ```
    pub fn put_all(&mut self, other: &LongMap<V>)
    where
        V: Clone,
    {
        self.reserve(other.len());
        for (key, value) in other.iter() {
            self.put(key, value.clone());
        }
    }

    /// Ensures the map can hold `additional` more live entries without
    /// growing.
    ///
    /// Rehashes (purging tombstones) if the current threshold is too small.
    ///
    /// # Panics
    ///
    /// Panics if the required slot count overflows `usize`.
    pub fn reserve(&mut self, additional: usize) {
        let required = self
            .occupied
            .checked_add(additional)
            .expect("capacity overflow");
        if required + self.tombstones <= self.max_occupancy {
            return;
        }
        let mut capacity = self.capacity();
        while max_occupancy(capacity, self.load_factor) < required {
            capacity = capacity.checked_mul(2).expect("capacity overflow");
        }
        self.rehash(capacity);
    }

    /// Returns an iterator over the live `(key, &value)` pairs.
    ///
    /// Iteration order is slot order and must not be relied upon.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use long_map::LongMap;
    ///
    /// let mut map = LongMap::new();
    /// map.put(1, "one");
    /// map.put(2, "two");
    /// assert_eq!(map.iter().count(), 2);
    /// ```
    pub fn iter(&self) -> Iter<'_, V> {
        Iter {
            states: &self.states,
            keys: &self.keys,
            values: &self.values,
            index: 0,
            remaining: self.occupied,
        }
    }

    /// Returns an iterator over the live keys, in arbitrary order.
    pub fn keys(&self) -> Keys<'_, V> {
        Keys { inner: self.iter() }
    }

    /// Returns an iterator over the live values, in arbitrary order.
    pub fn values(&self) -> Values<'_, V> {
        Values { inner: self.iter() }
    }

    /// Returns a cursor over the live entries that supports removing the
    /// entry it most recently yielded.
    ///
    /// The cursor borrows the map exclusively, so structural modification
    /// through any other path while it is alive is rejected at compile time.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use long_map::LongMap;
    ///
    /// let mut map = LongMap::new();
    /// map.put(1, "A");
    /// map.put(2, "B");
    ///
    /// let mut entries = map.entries();
    /// while let Some((key, _)) = entries.next() {
    ///     if key == 2 {
    ///         entries.remove();
    ///     }
    /// }
    /// assert_eq!(map.len(), 1);
    /// ```
    pub fn entries(&mut self) -> Entries<'_, V> {
        Entries {
            map: self,
            index: 0,
            current: None,
        }
    }

    /// Returns the entry for `key`, for in-place manipulation.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use long_map::LongMap;
    ///
    /// let mut map = LongMap::new();
    /// *map.entry(1).or_insert(0) += 10;
    /// *map.entry(1).or_insert(0) += 10;
    /// assert_eq!(map.get(1), Some(&20));
    /// ```
    pub fn entry(&mut self, key: i64) -> Entry<'_, V> {
        match self.find(key) {
            Some(index) => Entry::Occupied(OccupiedEntry { map: self, index }),
            None => Entry::Vacant(VacantEntry { map: self, key }),
        }
    }

    #[inline(always)]
    fn home_index(&self, key: i64) -> usize {
        (mix(key) as usize) & self.mask
    }

    /// Probe for a live occurrence of `key`. The first `Empty` slot proves
    /// absence; tombstones are skipped.
    fn find(&self, key: i64) -> Option<usize> {
        let mut index = self.home_index(key);
        loop {
            match self.states[index] {
                SlotState::Empty => return None,
                SlotState::Occupied if self.keys[index] == key => return Some(index),
                _ => index = (index + 1) & self.mask,
            }
        }
    }

    /// Probe for an insertion position, remembering the first tombstone on
    /// the way so churned keys reuse their old slots instead of lengthening
    /// the chain.
    fn find_insert_slot(&self, key: i64) -> RawSlot {
        let mut index = self.home_index(key);
        let mut reusable = None;
        loop {
            match self.states[index] {
                SlotState::Empty => {
                    return match reusable {
                        Some(tombstone) => RawSlot::Reusable(tombstone),
                        None => RawSlot::Free(index),
                    };
                }
                SlotState::Occupied if self.keys[index] == key => {
                    return RawSlot::Existing(index);
                }
                SlotState::Removed if reusable.is_none() => {
                    reusable = Some(index);
                    index = (index + 1) & self.mask;
                }
                _ => index = (index + 1) & self.mask,
            }
        }
    }

    /// First non-occupied slot for a key known to be absent. Used after a
    /// rehash, when no duplicate can exist.
    fn slot_for_new_key(&self, key: i64) -> usize {
        let mut index = self.home_index(key);
        while self.states[index] == SlotState::Occupied {
            index = (index + 1) & self.mask;
        }
        index
    }

    /// Insert or replace, returning the written slot and any previous value.
    fn put_slot(&mut self, key: i64, value: V) -> (usize, Option<V>) {
        match self.find_insert_slot(key) {
            RawSlot::Existing(index) => {
                let previous = self.values[index].replace(value);
                (index, previous)
            }
            RawSlot::Reusable(index) => {
                self.tombstones -= 1;
                self.fill_slot(index, key, value);
                (index, None)
            }
            RawSlot::Free(index) => {
                // The growth check runs before the write and counts
                // tombstones, so a churned table rehashes before its probe
                // chains can span every slot.
                let index = if self.occupied + self.tombstones >= self.max_occupancy {
                    self.grow();
                    self.slot_for_new_key(key)
                } else {
                    index
                };
                self.fill_slot(index, key, value);
                (index, None)
            }
        }
    }

    fn fill_slot(&mut self, index: usize, key: i64, value: V) {
        self.states[index] = SlotState::Occupied;
        self.keys[index] = key;
        self.values[index] = Some(value);
        self.occupied += 1;
    }

    fn remove_at(&mut self, index: usize) -> Option<V> {
        self.states[index] = SlotState::Removed;
        self.occupied -= 1;
        self.tombstones += 1;
        self.values[index].take()
    }

    fn slot_value_mut(&mut self, index: usize) -> &mut V {
        self.values[index]
            .as_mut()
            .expect("occupied slot holds a value")
    }

    /// Handle a tripped occupancy threshold. A table that is genuinely full
    /// of live entries doubles; one full of tombstones rehashes in place,
    /// which purges them without leaking capacity under put/remove churn.
    fn grow(&mut self) {
        let mut capacity = self.capacity();
        if self.occupied * 2 > self.max_occupancy {
            capacity = capacity.checked_mul(2).expect("capacity overflow");
        }
        // A tiny load factor pins the clamped threshold at 1 until the raw
        // product clears the live count, which can take several doublings.
        // The caller inserts right after, so the threshold must exceed
        // `occupied`, not merely reach it.
        while max_occupancy(capacity, self.load_factor) <= self.occupied {
            capacity = capacity.checked_mul(2).expect("capacity overflow");
        }
        self.rehash(capacity);
    }

    /// Rebuild the slot arrays at `new_capacity`, reinserting only live
    /// entries. This is the only path that returns the tombstone count to
    /// zero.
    fn rehash(&mut self, new_capacity: usize) {
        debug_assert!(new_capacity.is_power_of_two());
        debug_assert!(max_occupancy(new_capacity, self.load_factor) >= self.occupied);

        let old_states = mem::replace(&mut self.states, vec![SlotState::Empty; new_capacity]);
        let old_keys = mem::replace(&mut self.keys, vec![0; new_capacity]);
        let mut values = Vec::with_capacity(new_capacity);
        values.resize_with(new_capacity, || None);
        let old_values = mem::replace(&mut self.values, values);

        self.mask = new_capacity - 1;
        self.occupied = 0;
        self.tombstones = 0;
        self.max_occupancy = max_occupancy(new_capacity, self.load_factor);

        for ((state, key), value) in old_states.into_iter().zip(old_keys).zip(old_values) {
            if state == SlotState::Occupied {
                if let Some(value) = value {
                    let slot = self.slot_for_new_key(key);
                    self.fill_slot(slot, key, value);
                }
            }
        }
    }
}

impl<V> Default for LongMap<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> Debug for LongMap<V>
where
    V: Debug,
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<V> PartialEq for LongMap<V>
where
    V: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        if self.len() != other.len() {
            return false;
        }
        self.iter().all(|(key, value)| other.get(key) == Some(value))
    }
}

impl<V> Eq for LongMap<V> where V: Eq {}

impl<V> Hash for LongMap<V>
where
    V: Hash,
{
    /// Order-independent: per-entry contributions `mix(key) ^ hash(value)`
    /// are combined with wrapping addition, so equal maps hash equal no
    /// matter how their slots are laid out.
    fn hash<H: Hasher>(&self, state: &mut H) {
        let value_hasher = FixedState::default();
        let mut combined: u64 = 0;
        for (key, value) in self.iter() {
            combined = combined.wrapping_add(mix(key) ^ value_hasher.hash_one(value));
        }
        state.write_usize(self.occupied);
        state.write_u64(combined);
    }
}

impl<V> Extend<(i64, V)> for LongMap<V> {
    fn extend<I: IntoIterator<Item = (i64, V)>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        self.reserve(iter.size_hint().0);
        for (key, value) in iter {
            self.put(key, value);
        }
    }
}

impl<V> FromIterator<(i64, V)> for LongMap<V> {
    fn from_iter<I: IntoIterator<Item = (i64, V)>>(iter: I) -> Self {
        let mut map = LongMap::new();
        map.extend(iter);
        map
    }
}

impl<V> IntoIterator for LongMap<V> {
    type Item = (i64, V);
    type IntoIter = IntoIter<V>;

    fn into_iter(self) -> IntoIter<V> {
        IntoIter {
            states: self.states,
            keys: self.keys,
            values: self.values,
            index: 0,
            remaining: self.occupied,
        }
    }
}

impl<'a, V> IntoIterator for &'a LongMap<V> {
    type Item = (i64, &'a V);
    type IntoIter = Iter<'a, V>;

    fn into_iter(self) -> Iter<'a, V> {
        self.iter()
    }
}

/// An iterator over the live `(key, &value)` pairs of a `LongMap`.
pub struct Iter<'a, V> {
    states: &'a [SlotState],
    keys: &'a [i64],
    values: &'a [Option<V>],
    index: usize,
    remaining: usize,
}

impl<'a, V> Iterator for Iter<'a, V> {
    type Item = (i64, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        while self.index < self.states.len() {
            let slot = self.index;
            self.index += 1;
            if self.states[slot] == SlotState::Occupied {
                if let Some(value) = self.values[slot].as_ref() {
                    self.remaining -= 1;
                    return Some((self.keys[slot], value));
                }
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<V> ExactSizeIterator for Iter<'_, V> {}

/// An iterator over the live keys of a `LongMap`.
pub struct Keys<'a, V> {
    inner: Iter<'a, V>,
}

impl<V> Iterator for Keys<'_, V> {
    type Item = i64;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(key, _)| key)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<V> ExactSizeIterator for Keys<'_, V> {}

/// An iterator over the live values of a `LongMap`.
pub struct Values<'a, V> {
    inner: Iter<'a, V>,
}

impl<'a, V> Iterator for Values<'a, V> {
    type Item = &'a V;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(_, value)| value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<V> ExactSizeIterator for Values<'_, V> {}

/// An owning iterator over the entries of a `LongMap`.
pub struct IntoIter<V> {
    states: Vec<SlotState>,
    keys: Vec<i64>,
    values: Vec<Option<V>>,
    index: usize,
    remaining: usize,
}

impl<V> Iterator for IntoIter<V> {
    type Item = (i64, V);

    fn next(&mut self) -> Option<Self::Item> {
        while self.index < self.states.len() {
            let slot = self.index;
            self.index += 1;
            if self.states[slot] == SlotState::Occupied {
                if let Some(value) = self.values[slot].take() {
                    self.remaining -= 1;
                    return Some((self.keys[slot], value));
                }
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<V> ExactSizeIterator for IntoIter<V> {}

/// A removal cursor over the live entries of a `LongMap`.
///
/// Yields entries in slot order via [`next`]; [`remove`] tombstones the
/// most recently yielded entry without disturbing the traversal, including
/// when it is the last one. Constructed by [`LongMap::entries`].
///
/// [`next`]: Entries::next
/// [`remove`]: Entries::remove
pub struct Entries<'a, V> {
    map: &'a mut LongMap<V>,
    index: usize,
    current: Option<usize>,
}

impl<V> Entries<'_, V> {
    /// Advances to the next live entry, returning its key and a reference
    /// to its value.
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> Option<(i64, &V)> {
        while self.index < self.map.states.len() {
            let slot = self.index;
            self.index += 1;
            if self.map.states[slot] == SlotState::Occupied {
                self.current = Some(slot);
                let key = self.map.keys[slot];
                return self.map.values[slot].as_ref().map(|value| (key, value));
            }
        }
        self.current = None;
        None
    }

    /// Removes the entry most recently yielded by [`next`], returning its
    /// value.
    ///
    /// Returns `None` if no entry is current (before the first `next`, after
    /// the cursor is exhausted, or when called twice for the same entry).
    ///
    /// [`next`]: Entries::next
    pub fn remove(&mut self) -> Option<V> {
        let slot = self.current.take()?;
        self.map.remove_at(slot)
    }
}

/// A view into a single entry in the map, which may either be vacant or
/// occupied.
///
/// This enum is constructed from the [`entry`] method on [`LongMap`].
///
/// [`entry`]: LongMap::entry
pub enum Entry<'a, V> {
    /// A vacant entry.
    Vacant(VacantEntry<'a, V>),
    /// An occupied entry.
    Occupied(OccupiedEntry<'a, V>),
}

impl<'a, V> Entry<'a, V> {
    /// Inserts a default value if the entry is vacant and returns a mutable
    /// reference.
    pub fn or_insert(self, default: V) -> &'a mut V {
        match self {
            Entry::Occupied(entry) => entry.into_mut(),
            Entry::Vacant(entry) => entry.insert(default),
        }
    }

    /// Inserts a value computed from a closure if the entry is vacant and
    /// returns a mutable reference.
    pub fn or_insert_with<F>(self, default: F) -> &'a mut V
    where
        F: FnOnce() -> V,
    {
        match self {
            Entry::Occupied(entry) => entry.into_mut(),
            Entry::Vacant(entry) => entry.insert(default()),
        }
    }

    /// Provides in-place mutable access to an occupied entry before any
    /// potential insertion.
    pub fn and_modify<F>(self, f: F) -> Self
    where
        F: FnOnce(&mut V),
    {
        match self {
            Entry::Occupied(mut entry) => {
                f(entry.get_mut());
                Entry::Occupied(entry)
            }
            Entry::Vacant(entry) => Entry::Vacant(entry),
        }
    }

    /// Returns this entry's key.
    pub fn key(&self) -> i64 {
        match self {
            Entry::Occupied(entry) => entry.key(),
            Entry::Vacant(entry) => entry.key(),
        }
    }

    /// Inserts the default value if the entry is vacant and returns a
    /// mutable reference.
    pub fn or_default(self) -> &'a mut V
    where
        V: Default,
    {
        match self {
            Entry::Occupied(entry) => entry.into_mut(),
            Entry::Vacant(entry) => entry.insert(V::default()),
        }
    }
}

/// A view into an occupied entry in a `LongMap`.
pub struct OccupiedEntry<'a, V> {
    map: &'a mut LongMap<V>,
    index: usize,
}

impl<'a, V> OccupiedEntry<'a, V> {
    /// Returns this entry's key.
    pub fn key(&self) -> i64 {
        self.map.keys[self.index]
    }

    /// Returns a reference to the entry's value.
    pub fn get(&self) -> &V {
        self.map.values[self.index]
            .as_ref()
            .expect("occupied slot holds a value")
    }

    /// Returns a mutable reference to the entry's value.
    pub fn get_mut(&mut self) -> &mut V {
        self.map.slot_value_mut(self.index)
    }

    /// Converts the entry into a mutable reference with the map's lifetime.
    pub fn into_mut(self) -> &'a mut V {
        self.map.slot_value_mut(self.index)
    }

    /// Replaces the entry's value, returning the old one.
    pub fn insert(&mut self, value: V) -> V {
        mem::replace(self.get_mut(), value)
    }

    /// Removes the entry, returning its value.
    pub fn remove(self) -> V {
        self.map
            .remove_at(self.index)
            .expect("occupied slot holds a value")
    }
}

/// A view into a vacant entry in a `LongMap`.
pub struct VacantEntry<'a, V> {
    map: &'a mut LongMap<V>,
    key: i64,
}

impl<'a, V> VacantEntry<'a, V> {
    /// Returns the key that would be used on insertion.
    pub fn key(&self) -> i64 {
        self.key
    }

    /// Inserts a value, returning a mutable reference to it.
    pub fn insert(self, value: V) -> &'a mut V {
        let (index, _) = self.map.put_slot(self.key, value);
        self.map.slot_value_mut(index)
    }
}
