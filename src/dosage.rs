//! 투여 경로와 강도 단계별 투여량/지속 시간 표.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::quantity::Quantity;
use crate::range::{DoseRange, DurationRange};
use crate::units::{MassUnit, TimeUnit};

/// 투여 경로.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub enum SubstanceRoute {
    #[default]
    Undefined,
    Oral,
    Nasal,
    Rectal,
    Intravenous,
    Intramuscular,
    Sublingual,
    Vaporized,
    Smoked,
}

/// 투여 강도 단계.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub enum DoseLevel {
    #[default]
    Undefined,
    Light,
    Common,
    Uncommon,
    Strong,
    Heavy,
}

/// 한 강도 단계의 지속 시간과 투여량 범위.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LevelInfo {
    pub duration: DurationRange,
    pub dose: DoseRange,
}

/// 한 투여 경로의 단계별 정보.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RouteInfo {
    levels: BTreeMap<DoseLevel, LevelInfo>,
}

impl RouteInfo {
    pub fn new() -> Self {
        Self::default()
    }

    /// 단계 정보를 넣는다. 같은 단계가 있으면 이전 값을 돌려준다.
    pub fn insert(&mut self, level: DoseLevel, info: LevelInfo) -> Option<LevelInfo> {
        self.levels.insert(level, info)
    }

    pub fn levels(&self) -> &BTreeMap<DoseLevel, LevelInfo> {
        &self.levels
    }

    pub fn level(&self, level: DoseLevel) -> Option<&LevelInfo> {
        self.levels.get(&level)
    }

    pub fn dose_range(&self, level: DoseLevel) -> Option<&DoseRange> {
        self.level(level).map(|l| &l.dose)
    }

    pub fn duration_range(&self, level: DoseLevel) -> Option<&DurationRange> {
        self.level(level).map(|l| &l.duration)
    }
}

/// 물질 하나의 경로별 투여 정보.
///
/// 조회 대상 경로나 단계가 없으면 범위는 `None`, 물리량은 값 없는 기본값이 된다.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DosageProfile {
    routes: BTreeMap<SubstanceRoute, RouteInfo>,
}

impl DosageProfile {
    pub fn new() -> Self {
        Self::default()
    }

    /// 경로/단계 정보를 넣는다.
    pub fn insert(&mut self, route: SubstanceRoute, level: DoseLevel, info: LevelInfo) {
        self.routes.entry(route).or_default().insert(level, info);
    }

    pub fn routes(&self) -> &BTreeMap<SubstanceRoute, RouteInfo> {
        &self.routes
    }

    pub fn route(&self, route: SubstanceRoute) -> Option<&RouteInfo> {
        self.routes.get(&route)
    }

    pub fn can_administer(&self, route: SubstanceRoute) -> bool {
        self.routes.contains_key(&route)
    }

    pub fn dose_range(&self, route: SubstanceRoute, level: DoseLevel) -> Option<&DoseRange> {
        self.route(route)?.dose_range(level)
    }

    pub fn duration_range(
        &self,
        route: SubstanceRoute,
        level: DoseLevel,
    ) -> Option<&DurationRange> {
        self.route(route)?.duration_range(level)
    }

    pub fn min_dose(&self, route: SubstanceRoute, level: DoseLevel) -> Quantity<f32, MassUnit> {
        self.dose_range(route, level)
            .map(DoseRange::min_quantity)
            .unwrap_or_default()
    }

    pub fn max_dose(&self, route: SubstanceRoute, level: DoseLevel) -> Quantity<f32, MassUnit> {
        self.dose_range(route, level)
            .map(DoseRange::max_quantity)
            .unwrap_or_default()
    }

    pub fn min_duration(
        &self,
        route: SubstanceRoute,
        level: DoseLevel,
    ) -> Quantity<i32, TimeUnit> {
        self.duration_range(route, level)
            .map(DurationRange::min_quantity)
            .unwrap_or_default()
    }

    pub fn max_duration(
        &self,
        route: SubstanceRoute,
        level: DoseLevel,
    ) -> Quantity<i32, TimeUnit> {
        self.duration_range(route, level)
            .map(DurationRange::max_quantity)
            .unwrap_or_default()
    }
}
