/// Consistent-hash continuum over a pool's nodes.
///
/// Each node contributes a fixed number of points derived from SHA-1 digests
/// of `"{address}-{repetition}"`; a key belongs to the first point clockwise
/// from its own hash.
#[derive(Debug, Clone)]
pub struct KetamaRing {
    pub(crate) points: Vec<(u32, usize)>,
    pub(crate) nodes: usize,
}
