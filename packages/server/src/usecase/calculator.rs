//! UseCase: 計算サービス（税額・CGPA・投票資格）
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - CalculatorUseCase の 3 つの操作
//! - 生の入力（Vec<i64>）から Marks 値オブジェクトへの変換と検証
//!
//! ### なぜこのテストが必要か
//! - リモート呼び出しの入口で不正な入力を InvalidInput として拒否することを保証
//!
//! ### どのような状況を想定しているか
//! - 正常系：境界値での税額、CGPA、投票年齢
//! - 異常系：科目数の不足、範囲外の点数

use tracing::{info, warn};

use crate::domain::{Calculator, Marks};

use super::error::CalculatorError;

/// 計算サービスのユースケース
#[derive(Debug, Clone, Copy, Default)]
pub struct CalculatorUseCase {
    calculator: Calculator,
}

impl CalculatorUseCase {
    /// 新しい CalculatorUseCase を作成
    pub fn new(calculator: Calculator) -> Self {
        Self { calculator }
    }

    /// 所得に対する税額を計算
    pub fn calculate_tax(&self, income: f64) -> f64 {
        info!("Request received for tax on income {}", income);
        self.calculator.tax(income)
    }

    /// 5 科目の点数から CGPA を計算
    ///
    /// # Returns
    ///
    /// * `Ok(f64)` - 小数第 2 位に丸めた CGPA
    /// * `Err(CalculatorError::InvalidInput)` - 科目数が 5 でない、または点数が 0〜100 の範囲外
    pub fn calculate_cgpa(&self, marks: &[i64]) -> Result<f64, CalculatorError> {
        info!("Request received for CGPA of {} marks", marks.len());
        let marks = Marks::new(marks).inspect_err(|e| warn!("Rejected CGPA input: {}", e))?;
        Ok(self.calculator.cgpa(&marks))
    }

    /// 投票資格を判定
    pub fn is_eligible_to_vote(&self, age: i32) -> bool {
        info!("Request received for voting eligibility at age {}", age);
        self.calculator.is_eligible_to_vote(age)
    }
}
