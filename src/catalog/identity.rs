use serde::de::Error as DeError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Rung in the seniority ladder, ordered `l1` (foundation) through `l6`
/// (director).
///
/// The set is closed: levels key two mappings in the catalog (per-level
/// expectations and per-family typical titles), and completeness of those
/// mappings is checked at construction. Unknown identifiers are
/// deserialization errors rather than pass-through strings.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum LevelId {
    L1,
    L2,
    L3,
    L4,
    L5,
    L6,
}

/// Axis of evaluation applied uniformly across all levels.
///
/// Closed for the same reason as [`LevelId`]: every level must supply an
/// expectations list for every dimension, and that check only works when the
/// key set cannot grow under deserialization.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum DimensionId {
    Impact,
    Delivery,
    Craft,
    Collaboration,
    Security,
    Growth,
}

impl LevelId {
    /// All levels in ascending seniority order.
    pub const ALL: [LevelId; 6] = [
        LevelId::L1,
        LevelId::L2,
        LevelId::L3,
        LevelId::L4,
        LevelId::L5,
        LevelId::L6,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            LevelId::L1 => "l1",
            LevelId::L2 => "l2",
            LevelId::L3 => "l3",
            LevelId::L4 => "l4",
            LevelId::L5 => "l5",
            LevelId::L6 => "l6",
        }
    }

    fn from_str(value: &str) -> Option<Self> {
        match value {
            "l1" => Some(LevelId::L1),
            "l2" => Some(LevelId::L2),
            "l3" => Some(LevelId::L3),
            "l4" => Some(LevelId::L4),
            "l5" => Some(LevelId::L5),
            "l6" => Some(LevelId::L6),
            _ => None,
        }
    }
}

impl DimensionId {
    /// All dimensions in the display order used by the catalog.
    pub const ALL: [DimensionId; 6] = [
        DimensionId::Impact,
        DimensionId::Delivery,
        DimensionId::Craft,
        DimensionId::Collaboration,
        DimensionId::Security,
        DimensionId::Growth,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            DimensionId::Impact => "impact",
            DimensionId::Delivery => "delivery",
            DimensionId::Craft => "craft",
            DimensionId::Collaboration => "collaboration",
            DimensionId::Security => "security",
            DimensionId::Growth => "growth",
        }
    }

    fn from_str(value: &str) -> Option<Self> {
        match value {
            "impact" => Some(DimensionId::Impact),
            "delivery" => Some(DimensionId::Delivery),
            "craft" => Some(DimensionId::Craft),
            "collaboration" => Some(DimensionId::Collaboration),
            "security" => Some(DimensionId::Security),
            "growth" => Some(DimensionId::Growth),
            _ => None,
        }
    }
}

impl Serialize for LevelId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for LevelId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        LevelId::from_str(&value)
            .ok_or_else(|| D::Error::custom(format!("unknown level id '{value}', expected l1..l6")))
    }
}

impl Serialize for DimensionId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for DimensionId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        DimensionId::from_str(&value).ok_or_else(|| {
            D::Error::custom(format!(
                "unknown dimension id '{value}', expected one of impact/delivery/craft/collaboration/security/growth"
            ))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    #[test]
    fn level_ids_round_trip() {
        for level in LevelId::ALL {
            let json = serde_json::to_string(&level).unwrap();
            assert_eq!(json.trim_matches('"'), level.as_str());
            let back: LevelId = serde_json::from_str(&json).unwrap();
            assert_eq!(back, level);
        }
    }

    #[test]
    fn dimension_ids_round_trip() {
        for dimension in DimensionId::ALL {
            let json = serde_json::to_string(&dimension).unwrap();
            assert_eq!(json.trim_matches('"'), dimension.as_str());
            let back: DimensionId = serde_json::from_str(&json).unwrap();
            assert_eq!(back, dimension);
        }
    }

    #[test]
    fn unknown_identifiers_are_rejected() {
        assert!(serde_json::from_str::<LevelId>("\"l7\"").is_err());
        assert!(serde_json::from_str::<LevelId>("\"L1\"").is_err());
        assert!(serde_json::from_str::<DimensionId>("\"velocity\"").is_err());
    }

    #[test]
    fn levels_order_by_seniority() {
        let mut sorted = LevelId::ALL;
        sorted.sort();
        assert_eq!(sorted, LevelId::ALL);
        assert!(LevelId::L1 < LevelId::L6);
    }

    #[test]
    fn ids_work_as_map_keys() {
        let map: BTreeMap<DimensionId, u32> =
            serde_json::from_str("{\"impact\": 1, \"growth\": 2}").unwrap();
        assert_eq!(map.get(&DimensionId::Impact), Some(&1));
        assert_eq!(map.get(&DimensionId::Growth), Some(&2));
    }
}
