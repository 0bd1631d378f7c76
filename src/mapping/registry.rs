//! 타입 쌍 기반 매퍼 레지스트리

use std::any::{Any, TypeId, type_name};
use std::collections::HashMap;
use log::debug;
use crate::errors::{AppError, AppResult};

type ConvertFn = Box<dyn Fn(&dyn Any) -> Option<Box<dyn Any>> + Send + Sync>;

struct Rule {
    source: &'static str,
    destination: &'static str,
    convert: ConvertFn,
}

impl Rule {
    fn new<S: 'static, D: 'static>(f: fn(&S) -> D) -> Self {
        Self {
            source: type_name::<S>(),
            destination: type_name::<D>(),
            convert: Box::new(move |source: &dyn Any| {
                source
                    .downcast_ref::<S>()
                    .map(|s| Box::new(f(s)) as Box<dyn Any>)
            }),
        }
    }
}

/// 등록 단계 전용 빌더
///
/// 쌍 하나를 등록하면 정방향과 역방향 규칙이 함께 들어갑니다.
///
/// ```rust,ignore
/// let registry = MapperRegistryBuilder::new()
///     .register(entity_to_model, model_to_entity)?
///     .register(model_to_dto, dto_to_model)?
///     .build();
/// ```
#[derive(Default)]
pub struct MapperRegistryBuilder {
    rules: HashMap<(TypeId, TypeId), Rule>,
}

impl MapperRegistryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// `(A, B)` 쌍의 양방향 변환 규칙을 등록합니다.
    ///
    /// # Errors
    ///
    /// * `A`와 `B`가 같은 타입이면 `ConfigurationFault`
    /// * `(A, B)` 또는 `(B, A)`가 이미 등록되어 있으면 `ConfigurationFault`
    pub fn register<A: 'static, B: 'static>(
        mut self,
        forward: fn(&A) -> B,
        reverse: fn(&B) -> A,
    ) -> AppResult<Self> {
        let a = TypeId::of::<A>();
        let b = TypeId::of::<B>();

        if a == b {
            return Err(AppError::ConfigurationFault(format!(
                "자기 자신으로의 매핑은 등록할 수 없습니다: {}",
                type_name::<A>()
            )));
        }

        if self.rules.contains_key(&(a, b)) || self.rules.contains_key(&(b, a)) {
            return Err(AppError::ConfigurationFault(format!(
                "이미 등록된 매핑 쌍입니다: {} <-> {}",
                type_name::<A>(),
                type_name::<B>()
            )));
        }

        self.rules.insert((a, b), Rule::new(forward));
        self.rules.insert((b, a), Rule::new(reverse));
        debug!("매핑 등록: {} <-> {}", type_name::<A>(), type_name::<B>());

        Ok(self)
    }

    /// 등록을 마감하고 불변 레지스트리를 만듭니다.
    pub fn build(self) -> MapperRegistry {
        MapperRegistry { rules: self.rules }
    }
}

/// 등록이 끝난 불변 레지스트리
///
/// 잠금 없이 여러 요청에서 동시에 조회할 수 있습니다.
pub struct MapperRegistry {
    rules: HashMap<(TypeId, TypeId), Rule>,
}

impl MapperRegistry {
    /// `S`를 `D`로 변환합니다.
    ///
    /// 등록되지 않은 쌍은 `InternalError`입니다.
    pub fn convert<S: 'static, D: 'static>(&self, source: &S) -> AppResult<D> {
        let rule = self
            .rules
            .get(&(TypeId::of::<S>(), TypeId::of::<D>()))
            .ok_or_else(|| {
                AppError::InternalError(format!(
                    "등록되지 않은 매핑입니다: {} -> {}",
                    type_name::<S>(),
                    type_name::<D>()
                ))
            })?;

        (rule.convert)(source)
            .and_then(|boxed| boxed.downcast::<D>().ok())
            .map(|boxed| *boxed)
            .ok_or_else(|| {
                AppError::InternalError(format!(
                    "매핑 결과 타입이 일치하지 않습니다: {} -> {}",
                    rule.source, rule.destination
                ))
            })
    }

    /// 시퀀스 전체를 변환합니다. 첫 실패에서 멈춥니다.
    pub fn convert_all<S: 'static, D: 'static>(&self, sources: &[S]) -> AppResult<Vec<D>> {
        sources.iter().map(|s| self.convert(s)).collect()
    }

    pub fn contains<S: 'static, D: 'static>(&self) -> bool {
        self.rules.contains_key(&(TypeId::of::<S>(), TypeId::of::<D>()))
    }

    /// 등록된 단방향 규칙 수
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl std::fmt::Debug for MapperRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut pairs: Vec<String> = self
            .rules
            .values()
            .map(|r| format!("{} -> {}", r.source, r.destination))
            .collect();
        pairs.sort();
        f.debug_struct("MapperRegistry").field("rules", &pairs).finish()
    }
}
