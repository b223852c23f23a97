use crate::cache::structs::ketama_ring::KetamaRing;
use ahash::AHashMap;
use sha1::{Digest, Sha1};

pub const POINTS_PER_NODE: usize = 160;

impl KetamaRing {
    pub fn new<S: AsRef<str>>(nodes: &[S]) -> KetamaRing {
        let mut points = Vec::with_capacity(nodes.len() * POINTS_PER_NODE);
        for (index, node) in nodes.iter().enumerate() {
            // Every digest yields four points.
            for repetition in 0..POINTS_PER_NODE / 4 {
                let digest = Sha1::digest(format!("{}-{}", node.as_ref(), repetition).as_bytes());
                for chunk in digest[..16].chunks_exact(4) {
                    points.push((Self::point(chunk), index));
                }
            }
        }
        points.sort_unstable();
        KetamaRing {
            points,
            nodes: nodes.len(),
        }
    }

    fn point(bytes: &[u8]) -> u32 {
        u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]])
    }

    pub fn hash_key(key: &str) -> u32 {
        let digest = Sha1::digest(key.as_bytes());
        Self::point(&digest[..4])
    }

    pub fn node_for(&self, key: &str) -> Option<usize> {
        if self.points.is_empty() {
            return None;
        }
        let hash = Self::hash_key(key);
        let position = self.points.partition_point(|(point, _)| *point < hash);
        let (_, node) = self.points.get(position).copied().unwrap_or(self.points[0]);
        Some(node)
    }

    /// Groups keys by owning node index, preserving the input order per node.
    pub fn partition<'a>(&self, keys: &'a [String]) -> AHashMap<usize, Vec<&'a str>> {
        let mut grouped: AHashMap<usize, Vec<&'a str>> = AHashMap::new();
        for key in keys {
            if let Some(node) = self.node_for(key) {
                grouped.entry(node).or_default().push(key.as_str());
            }
        }
        grouped
    }

    pub fn node_count(&self) -> usize {
        self.nodes
    }

    pub fn point_count(&self) -> usize {
        self.points.len()
    }
}
