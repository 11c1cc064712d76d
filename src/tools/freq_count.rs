use rustc_hash::FxHashMap;

/// Returns a frequency count of the input data. Only symbols that actually
/// occur appear as keys, so the counts always sum to the input length.
pub fn freqs(data: &[u8]) -> FxHashMap<u8, u32> {
    let mut freqs = FxHashMap::default();
    data.iter().for_each(|&el| *freqs.entry(el).or_insert(0) += 1);
    freqs
}
