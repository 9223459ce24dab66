//! 日期展示模块
//!
//! 后端以 ISO-8601 (UTC) 传输时间，UI 统一以 `dd/mm/aaaa` 展示。

use chrono::{DateTime, Utc};

/// 格式化日期（不含时间）
pub fn formatea_fecha(fecha: &DateTime<Utc>) -> String {
    fecha.format("%d/%m/%Y").to_string()
}

/// 格式化日期与时间
pub fn formatea_fecha_hora(fecha: &DateTime<Utc>) -> String {
    fecha.format("%d/%m/%Y %H:%M").to_string()
}

/// 可缺省日期的展示形式，缺省时返回占位符
pub fn fecha_o_pendiente(fecha: Option<&DateTime<Utc>>) -> String {
    match fecha {
        Some(f) => formatea_fecha(f),
        None => "Por definir".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn formato_dia_mes_anio() {
        let fecha = Utc.with_ymd_and_hms(2026, 3, 15, 18, 30, 0).unwrap();
        assert_eq!(formatea_fecha(&fecha), "15/03/2026");
        assert_eq!(formatea_fecha_hora(&fecha), "15/03/2026 18:30");
    }

    #[test]
    fn fecha_ausente_muestra_placeholder() {
        assert_eq!(fecha_o_pendiente(None), "Por definir");
    }
}
