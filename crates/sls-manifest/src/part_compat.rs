use crate::errors::PartCompatibilityError;
use crate::types::{CompatibilityExpression, PartFamily};
use once_cell::sync::Lazy;
use regex::Regex;

/// Family/generation codes such as `bg1`, `mg12`, `gg`, `pg`, `zg`.
static PART_TOKEN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[mpbfg]g1[12]?|[glwhtz]?g")
        .unwrap_or_else(|e| panic!("invalid part token pattern: {}", e))
});

/// Derive the compatibility wildcard for a raw part number.
///
/// `EFR32BG1P232F256GM48` maps to `mcu.arm.efr32.bg1.*` and
/// `EFM32GG990F1024` to `mcu.arm.efm32.gg.*`.
pub fn part_compatibility(part: &str) -> Result<CompatibilityExpression, PartCompatibilityError> {
    let lower = part.to_lowercase();

    let family = if lower.contains(PartFamily::Efm32.as_str()) {
        PartFamily::Efm32
    } else if lower.contains(PartFamily::Efr32.as_str()) {
        PartFamily::Efr32
    } else {
        return Err(PartCompatibilityError::UnknownFamily(part.to_string()));
    };

    let token = PART_TOKEN
        .find(&lower)
        .ok_or_else(|| PartCompatibilityError::NoToken(part.to_string()))?;

    Ok(CompatibilityExpression {
        family,
        token: token.as_str().to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn expr(part: &str) -> Option<String> {
        part_compatibility(part).ok().map(|e| e.to_string())
    }

    #[test]
    fn test_known_parts() {
        let cases = [
            ("EFR32BG1P232F256GM48", "mcu.arm.efr32.bg1.*"),
            ("EFR32BG12P332F1024GL125", "mcu.arm.efr32.bg12.*"),
            ("EFR32FG1P133F256GM48", "mcu.arm.efr32.fg1.*"),
            ("EFR32MG12P432F1024GL125", "mcu.arm.efr32.mg12.*"),
            ("EFM32G890F128", "mcu.arm.efm32.g.*"),
            ("EFM32GG990F1024", "mcu.arm.efm32.gg.*"),
            ("EFM32HG322F64", "mcu.arm.efm32.hg.*"),
            ("EFM32LG990F256", "mcu.arm.efm32.lg.*"),
            ("EFM32PG1B200F256GM48", "mcu.arm.efm32.pg1.*"),
            ("EFM32PG12B500F1024GL125", "mcu.arm.efm32.pg12.*"),
            ("EFM32WG990F256", "mcu.arm.efm32.wg.*"),
            ("EFM32ZG222F32", "mcu.arm.efm32.zg.*"),
        ];
        for (part, expected) in cases {
            assert_eq!(expr(part).as_deref(), Some(expected), "part {}", part);
        }
    }

    #[test]
    fn test_mapping_is_deterministic() {
        let first = part_compatibility("EFR32BG1P232F256GM48");
        let second = part_compatibility("EFR32BG1P232F256GM48");
        assert_eq!(first, second);
        assert_eq!(expr("efr32bg1p232f256gm48"), expr("EFR32BG1P232F256GM48"));
    }

    #[test]
    fn test_unknown_family() {
        assert_eq!(
            part_compatibility("STM32F407VG"),
            Err(PartCompatibilityError::UnknownFamily("STM32F407VG".to_string()))
        );
    }

    #[test]
    fn test_no_token() {
        assert_eq!(
            part_compatibility("EFM32"),
            Err(PartCompatibilityError::NoToken("EFM32".to_string()))
        );
    }
}
