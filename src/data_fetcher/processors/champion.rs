use tracing::warn;

use crate::data_fetcher::models::Season;

/// Returns the champion of a season: the first standing with the championship
/// result in the top division, scanned in server order.
///
/// Returns `None` when the top division is missing or nobody holds the
/// championship result.
pub fn extract_champion(season: &Season) -> Option<&str> {
    let top = season.divisions.iter().find(|d| d.is_top())?;
    let mut champions = top.standings.iter().filter(|s| s.is_champion());
    let champion = champions.next()?;

    let others = champions.count();
    if others > 0 {
        // Tie-break is undefined upstream; keep server order.
        warn!(
            "Season {} has {} championship standings in division 1, using {}",
            season.uuid,
            others + 1,
            champion.username
        );
    }

    Some(champion.username.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data_fetcher::models::{Division, SeasonStatus, Standing};

    fn standing(username: &str, result: i32) -> Standing {
        Standing {
            username: username.to_string(),
            result,
        }
    }

    fn division(number: i32, standings: Vec<Standing>) -> Division {
        Division {
            uuid: format!("div-{number}"),
            division_number: number,
            standings,
        }
    }

    fn completed_season(divisions: Vec<Division>) -> Season {
        Season {
            uuid: "season-9".to_string(),
            season_number: 9,
            status: SeasonStatus::Completed,
            divisions,
            ..Season::default()
        }
    }

    #[test]
    fn test_champion_from_top_division() {
        let season = completed_season(vec![division(1, vec![standing("x", 2), standing("y", 4)])]);
        assert_eq!(extract_champion(&season), Some("y"));
    }

    #[test]
    fn test_champion_ignores_lower_divisions() {
        let season = completed_season(vec![
            division(2, vec![standing("lower", 4)]),
            division(1, vec![standing("top", 1), standing("other", 3)]),
        ]);
        assert_eq!(extract_champion(&season), None);
    }

    #[test]
    fn test_no_top_division_means_no_champion() {
        let season = completed_season(vec![division(2, vec![standing("z", 4)])]);
        assert_eq!(extract_champion(&season), None);
        assert_eq!(extract_champion(&completed_season(vec![])), None);
    }

    #[test]
    fn test_multiple_champions_takes_first_in_server_order() {
        let season = completed_season(vec![division(
            1,
            vec![standing("b", 4), standing("a", 4)],
        )]);
        assert_eq!(extract_champion(&season), Some("b"));
    }
}
