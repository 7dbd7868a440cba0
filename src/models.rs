use std::fmt;

/// 一次提交中通过校验的测量值
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Measurement {
    pub weight_kg: f64,
    pub height_cm: f64,
}

/// 输入校验失败（任一字段无法解析为有限数）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidationFailure;

impl fmt::Display for ValidationFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "体重或身高不是有效数字")
    }
}

impl std::error::Error for ValidationFailure {}

/// BMI 分类区间，左闭右开 [lower, upper)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CategoryBand {
    pub lower: f64,
    pub upper: f64,
    pub label: &'static str,
}

/// 四个分类区间，按升序覆盖 [0, +∞)，无缝隙无重叠
pub static BMI_CATEGORIES: [CategoryBand; 4] = [
    CategoryBand {
        lower: 0.0,
        upper: 18.5,
        label: "Underweight",
    },
    CategoryBand {
        lower: 18.5,
        upper: 25.0,
        label: "Normal",
    },
    CategoryBand {
        lower: 25.0,
        upper: 30.0,
        label: "Overweight",
    },
    CategoryBand {
        lower: 30.0,
        upper: f64::INFINITY,
        label: "Obese",
    },
];

/// 解析两个原始输入字符串
///
/// 任一字段解析失败则整次提交被拒绝，不做部分计算。
/// 只要求有限数：零和负数照常通过（见 DESIGN.md）。
pub fn parse_measurement(
    weight_raw: &str,
    height_raw: &str,
) -> Result<Measurement, ValidationFailure> {
    let weight_kg = parse_finite(weight_raw)?;
    let height_cm = parse_finite(height_raw)?;
    Ok(Measurement {
        weight_kg,
        height_cm,
    })
}

fn parse_finite(raw: &str) -> Result<f64, ValidationFailure> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or(ValidationFailure)
}

/// 计算原始 BMI
///
/// 不对身高做除零保护：身高为 0 会得到非有限值并向下游传播。
pub fn compute_bmi(m: &Measurement) -> f64 {
    let height_m = m.height_cm / 100.0;
    m.weight_kg / height_m / height_m
}

/// 四舍五入到两位小数（half away from zero）
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// 按区间表升序扫描分类
///
/// 负数和非有限值不落在任何区间内，返回 None。
pub fn classify(bmi: f64) -> Option<&'static CategoryBand> {
    BMI_CATEGORIES
        .iter()
        .find(|band| bmi >= band.lower && bmi < band.upper)
}

/// 在 0-40 刻度上的显示比例，超出部分封顶
pub fn display_fraction(bmi: f64) -> f64 {
    if bmi.is_nan() {
        return 0.0;
    }
    (bmi / 40.0).clamp(0.0, 1.0)
}

/// 计算结果，一次提交生成后不再修改
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BmiResult {
    pub value: f64,
    pub category: Option<&'static CategoryBand>,
}

impl BmiResult {
    /// 由测量值计算结果：计算 -> 取整 -> 分类
    pub fn from_measurement(m: &Measurement) -> Self {
        let value = round2(compute_bmi(m));
        Self {
            value,
            category: classify(value),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_measurement() {
        let m = parse_measurement("70", "175").unwrap();
        assert_eq!(m.weight_kg, 70.0);
        assert_eq!(m.height_cm, 175.0);
    }

    #[test]
    fn test_parse_accepts_decimals_and_whitespace() {
        let m = parse_measurement(" 70.5 ", "175.2").unwrap();
        assert_eq!(m.weight_kg, 70.5);
        assert_eq!(m.height_cm, 175.2);
    }

    #[test]
    fn test_parse_rejects_non_numeric() {
        assert!(parse_measurement("abc", "170").is_err());
        assert!(parse_measurement("70", "").is_err());
        assert!(parse_measurement("", "").is_err());
        assert!(parse_measurement("7O", "170").is_err());
    }

    #[test]
    fn test_parse_rejects_non_finite() {
        assert!(parse_measurement("nan", "170").is_err());
        assert!(parse_measurement("inf", "170").is_err());
        assert!(parse_measurement("70", "-inf").is_err());
    }

    #[test]
    fn test_parse_keeps_zero_and_negative() {
        assert!(parse_measurement("0", "0").is_ok());
        assert!(parse_measurement("-70", "175").is_ok());
    }

    #[test]
    fn test_bmi_normal_example() {
        let m = Measurement {
            weight_kg: 70.0,
            height_cm: 175.0,
        };
        let result = BmiResult::from_measurement(&m);
        assert_eq!(result.value, 22.86);
        assert_eq!(result.category.unwrap().label, "Normal");
    }

    #[test]
    fn test_bmi_obese_example() {
        let m = Measurement {
            weight_kg: 120.0,
            height_cm: 160.0,
        };
        let result = BmiResult::from_measurement(&m);
        assert_eq!(result.value, 46.88);
        assert_eq!(result.category.unwrap().label, "Obese");
        assert_eq!(display_fraction(result.value), 1.0);
    }

    #[test]
    fn test_band_boundaries_belong_to_higher_band() {
        assert_eq!(classify(0.0).unwrap().label, "Underweight");
        assert_eq!(classify(18.49).unwrap().label, "Underweight");
        assert_eq!(classify(18.5).unwrap().label, "Normal");
        assert_eq!(classify(24.99).unwrap().label, "Normal");
        assert_eq!(classify(25.0).unwrap().label, "Overweight");
        assert_eq!(classify(29.99).unwrap().label, "Overweight");
        assert_eq!(classify(30.0).unwrap().label, "Obese");
        assert_eq!(classify(1000.0).unwrap().label, "Obese");
    }

    #[test]
    fn test_classify_out_of_domain_has_no_band() {
        assert!(classify(-0.01).is_none());
        assert!(classify(f64::NAN).is_none());
        assert!(classify(f64::INFINITY).is_none());
    }

    #[test]
    fn test_zero_height_propagates_as_non_finite() {
        let m = Measurement {
            weight_kg: 70.0,
            height_cm: 0.0,
        };
        let result = BmiResult::from_measurement(&m);
        assert!(result.value.is_infinite());
        assert!(result.category.is_none());
    }

    #[test]
    fn test_round2_ties_away_from_zero() {
        assert_eq!(round2(46.875), 46.88);
        assert_eq!(round2(-46.875), -46.88);
        assert_eq!(round2(22.857142857142858), 22.86);
    }

    #[test]
    fn test_display_fraction_clamps() {
        assert_eq!(display_fraction(20.0), 0.5);
        assert_eq!(display_fraction(40.0), 1.0);
        assert_eq!(display_fraction(55.0), 1.0);
        assert_eq!(display_fraction(-3.0), 0.0);
        assert_eq!(display_fraction(f64::INFINITY), 1.0);
        assert_eq!(display_fraction(f64::NAN), 0.0);
    }
}
