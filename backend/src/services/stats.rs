//! Derived figures for list headers and the dashboard.

use crate::models::cliente::ClientesStats;

/// Builds the client counters from the raw totals. The paid share is
/// rounded to the nearest whole percent; an empty gym reports 0%.
pub fn clientes_stats(total_clientes: i64, clientes_pagados: i64) -> ClientesStats {
    let porcentaje_pagados = if total_clientes > 0 {
        (clientes_pagados * 100 + total_clientes / 2) / total_clientes
    } else {
        0
    };
    ClientesStats {
        total_clientes,
        clientes_pagados,
        clientes_pendientes: total_clientes - clientes_pagados,
        porcentaje_pagados,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_gym_reports_zero_percent() {
        let stats = clientes_stats(0, 0);
        assert_eq!(stats.porcentaje_pagados, 0);
        assert_eq!(stats.clientes_pendientes, 0);
    }

    #[test]
    fn share_rounds_to_nearest_percent() {
        // 2 of 3 paid -> 66.67% -> 67
        let stats = clientes_stats(3, 2);
        assert_eq!(stats.porcentaje_pagados, 67);
        assert_eq!(stats.clientes_pendientes, 1);

        // 1 of 3 paid -> 33.33% -> 33
        let stats = clientes_stats(3, 1);
        assert_eq!(stats.porcentaje_pagados, 33);
    }

    #[test]
    fn all_paid_is_one_hundred_percent() {
        let stats = clientes_stats(12, 12);
        assert_eq!(stats.porcentaje_pagados, 100);
        assert_eq!(stats.clientes_pendientes, 0);
    }
}
