//! Shared fixtures for the integration tests.

#![allow(dead_code)]

use video_desc::GameRecord;

/// Regular-season game logged by name and jersey number.
pub const REGULAR_SEASON_YAML: &str = r#"
date: 2023-11-04
division: Norcal U12 Premier
round: null
home_team: Bay Area Surf 13B Pre-MLS
away_team: Palo Alto SC 12B Gold
goals:
  - timestamp: 3:27
    scoring_team: H
    scoring_player: Dominic
    assist_player: Ayden
  - timestamp: 4:47
    scoring_team: H
    scoring_player: Galvan
    assist_player: null
  - timestamp: 7:58
    scoring_team: H
    scoring_player: Dominic
    assist_player: Joshua
  - timestamp: 8:33
    scoring_team: H
    scoring_player: Dominic
    assist_player: Ryan
  - timestamp: 9:00
    scoring_team: H
    scoring_player: Cameron
    assist_player: Owen
  - timestamp: 10:03
    scoring_team: A
    scoring_player: 27
    assist_player: 70
  - timestamp: 11:02
    scoring_team: A
    scoring_player: 90
    assist_player: 6
  - timestamp: 11:32
    scoring_team: H
    scoring_player: Dominic
    assist_player: null
"#;

pub const REGULAR_SEASON_DESCRIPTION: &str = "\
Bay Area Surf 13B Pre-MLS 6-2 Palo Alto SC 12B Gold | Norcal U12 Premier | 2023-11-04

2023-11-04 Norcal U12 Premier

Bay Area Surf 13B Pre-MLS 6-2 Palo Alto SC 12B Gold

3:27 Bay Area Surf [1]-0 Palo Alto SC - Dominic (assist from Ayden)
4:47 Bay Area Surf [2]-0 Palo Alto SC - Galvan
7:58 Bay Area Surf [3]-0 Palo Alto SC - Dominic (assist from Joshua)
8:33 Bay Area Surf [4]-0 Palo Alto SC - Dominic (assist from Ryan)
9:00 Bay Area Surf [5]-0 Palo Alto SC - Cameron (assist from Owen)
10:03 Bay Area Surf 5-[1] Palo Alto SC - #27 (assist from #70)
11:02 Bay Area Surf 5-[2] Palo Alto SC - #90 (assist from #6)
11:32 Bay Area Surf [6]-2 Palo Alto SC - Dominic";

/// Game with minutes and shorthand assists, including an unknown scorer.
pub const SHORTHAND_YAML: &str = r#"
date: 2023-11-04
division: Norcal U12 Premier
home_team: Bay Area Surf 13B Pre-MLS
away_team: Palo Alto SC 12B Gold
goals:
  - timestamp: 3:27
    scoring_team: H
    scoring_player: Dominic
    assist_player: Ayden
    minute: 4
  - timestamp: 4:47
    scoring_team: H
    scoring_player: Galvan
    assist_player: PK
    minute: 5
  - timestamp: 10:03
    scoring_team: A
    scoring_player: 27
    assist_player: 70
    minute: 11
  - timestamp: 11:02
    scoring_team: A
    scoring_player: 90
    assist_player: FK
    minute: 12
  - timestamp: 11:32
    scoring_team: H
    scoring_player: null
    assist_player: OG
    minute: 13
"#;

pub const SHORTHAND_DESCRIPTION: &str = "\
Bay Area Surf 13B Pre-MLS 3-2 Palo Alto SC 12B Gold | Norcal U12 Premier | 2023-11-04

2023-11-04 Norcal U12 Premier

Bay Area Surf 13B Pre-MLS 3-2 Palo Alto SC 12B Gold

3:27 Bay Area Surf [1]-0 Palo Alto SC - Dominic (assist from Ayden) 4'
4:47 Bay Area Surf [2]-0 Palo Alto SC - Galvan (penalty kick) 5'
10:03 Bay Area Surf 2-[1] Palo Alto SC - #27 (assist from #70) 11'
11:02 Bay Area Surf 2-[2] Palo Alto SC - #90 (free kick) 12'
11:32 Bay Area Surf [3]-2 Palo Alto SC - None (own goal) 13'";

/// Tournament final with explicit abbreviations; its title needs abbreviating.
pub const TOURNAMENT_YAML: &str = r#"
date: 2023-10-29
division: LV Mayor's Cup U11 1st Div
round: Final
home_team: Bay Area Surf 13B Pre-MLS
home_team_abbrev: Surf
away_team: CV Futbol Academy 13B I
away_team_abbrev: CVFA
goals:
  - timestamp: 3:23
    scoring_team: H
    scoring_player: Eli
    assist_player: FK
    minute: 13
  - timestamp: 4:26
    scoring_team: H
    scoring_player: Galvan
    assist_player: Alexander
    minute: 19
  - timestamp: 7:58
    scoring_team: H
    scoring_player: Dominic
    assist_player: Galvan
    minute: 29
  - timestamp: 9:04
    scoring_team: H
    scoring_player: Dominic
    assist_player: Alexander
    minute: 60+2
"#;

pub const TOURNAMENT_DESCRIPTION: &str = "\
Bay Area Surf 13B Pre-MLS 4-0 CV Futbol Academy 13B I | LV Mayor's Cup U11 1st Div|Final|2023-10-29

2023-10-29 LV Mayor's Cup U11 1st Div (Final)

Bay Area Surf 13B Pre-MLS 4-0 CV Futbol Academy 13B I

3:23 Surf [1]-0 CVFA - Eli (free kick) 13'
4:26 Surf [2]-0 CVFA - Galvan (assist from Alexander) 19'
7:58 Surf [3]-0 CVFA - Dominic (assist from Galvan) 29'
9:04 Surf [4]-0 CVFA - Dominic (assist from Alexander) 60+2'";

/// Hand-written description in the older terse style, with footer noise.
pub const LEGACY_TEXT: &str = "
2022-09-10 Norcal U10B Region 1/2 Gold South

Bay Area Surf 2 : 4 ECFC

4:11 ECFC - #8: 0-1
5:06 ECFC - #8 (assist from #20): 0-2
6:45 ECFC - #3: 0-3
9:42 ECFC - #6 (assist from #11) : 0-4
10:01 Surf - Luke: 1-4
10:31 Surf - Jamie (assist from Alex): 2-4

Norcal U10B Region 1/2 Gold South (2022 fall league) - Event Page: https://system.gotsport.com/org_event/events/15482/schedules?group=90450

2022/23 (2013B) Norcal U10 Playlist: https://youtube.com/playlist?list=PLo96kgYq9NqugI0qLezxyQB0Z891dNvBJ
";

pub fn record(yaml: &str) -> GameRecord {
    serde_yaml::from_str(yaml).expect("fixture YAML is valid")
}
