//! 세션 범위의 저장된 프로젝트 목록.

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

use crate::engine::CalculationResult;
use crate::shape::DimensionField;

/// 저장된 프로젝트 한 건: 계산 결과 스냅샷 + 생성 시각.
/// 다른 항목이나 계산기와 상태를 공유하지 않는다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SavedProject {
    pub id: u64,
    pub name: String,
    pub material: String,
    pub shape: String,
    pub dimensions: Vec<(DimensionField, f64)>,
    pub weight_kg: f64,
    pub price: f64,
    pub created_at: DateTime<Local>,
}

impl SavedProject {
    /// "100 × 1000 × 10" 식의 치수 요약.
    pub fn dimension_summary(&self) -> String {
        self.dimensions
            .iter()
            .map(|(_, v)| format!("{v}"))
            .collect::<Vec<_>>()
            .join(" × ")
    }
}

/// 세션 동안의 프로젝트 모음. 저장/삭제는 명시적 사용자 동작으로만 일어난다.
#[derive(Debug, Default)]
pub struct ProjectBook {
    next_id: u64,
    projects: Vec<SavedProject>,
}

impl ProjectBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// 결과를 스냅샷으로 저장한다. 공백뿐인 이름이면 아무것도 하지 않는다.
    /// 최신 항목이 목록 맨 앞에 온다.
    pub fn save(&mut self, name: &str, result: &CalculationResult) -> Option<u64> {
        let name = name.trim();
        if name.is_empty() {
            return None;
        }
        self.next_id += 1;
        let project = SavedProject {
            id: self.next_id,
            name: name.to_string(),
            material: result.material.clone(),
            shape: result.shape.clone(),
            dimensions: result.dimensions.clone(),
            weight_kg: result.weight_kg,
            price: result.total_price,
            created_at: Local::now(),
        };
        self.projects.insert(0, project);
        Some(self.next_id)
    }

    /// id가 없으면 아무 일도 하지 않고 false를 돌려준다.
    pub fn remove(&mut self, id: u64) -> bool {
        let before = self.projects.len();
        self.projects.retain(|p| p.id != id);
        self.projects.len() != before
    }

    pub fn iter(&self) -> impl Iterator<Item = &SavedProject> {
        self.projects.iter()
    }

    pub fn len(&self) -> usize {
        self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }

    /// 저장된 모든 프로젝트 가격의 합 [₹].
    pub fn total_value(&self) -> f64 {
        self.projects.iter().map(|p| p.price).sum()
    }

    pub fn clear(&mut self) {
        self.projects.clear();
    }

    /// 목록 전체를 JSON으로 직렬화한다(내보내기용).
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&self.projects)
    }

    /// JSON 스냅샷을 현재 목록에 병합한다. id는 이 세션의 카운터로 다시
    /// 매겨서 충돌을 피한다. 추가된 항목 수를 돌려준다.
    pub fn merge_json(&mut self, json: &str) -> serde_json::Result<usize> {
        let imported: Vec<SavedProject> = serde_json::from_str(json)?;
        let count = imported.len();
        for mut project in imported {
            self.next_id += 1;
            project.id = self.next_id;
            self.projects.push(project);
        }
        Ok(count)
    }
}
