use crate::utils::UnknownLabel;
use serde::Serialize;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

#[derive(Debug, Clone)]
pub struct Player {
    pub id: String,
    pub name: String,
    pub position: PlayerPosition,
    pub club_id: Option<String>,
    pub nationality: String,
    pub preferred_foot: Option<PreferredFoot>,
}

impl Player {
    pub fn is_affiliated_with(&self, club_id: &str) -> bool {
        self.club_id.as_deref() == Some(club_id)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum PlayerPosition {
    #[serde(rename = "Goleiro")]
    Goalkeeper,
    #[serde(rename = "Zagueiro")]
    CenterBack,
    #[serde(rename = "Lateral Esquerdo")]
    LeftBack,
    #[serde(rename = "Lateral Direito")]
    RightBack,
    #[serde(rename = "Volante")]
    DefensiveMidfielder,
    #[serde(rename = "Meio-campista")]
    CentralMidfielder,
    #[serde(rename = "Meia Atacante")]
    AttackingMidfielder,
    #[serde(rename = "Ponta Esquerda")]
    LeftWinger,
    #[serde(rename = "Ponta Direita")]
    RightWinger,
    #[serde(rename = "Centroavante")]
    Striker,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlayerFieldPositionGroup {
    Goalkeeper,
    Defender,
    Midfielder,
    Forward,
}

impl PlayerPosition {
    pub const ALL: [PlayerPosition; 10] = [
        PlayerPosition::Goalkeeper,
        PlayerPosition::CenterBack,
        PlayerPosition::LeftBack,
        PlayerPosition::RightBack,
        PlayerPosition::DefensiveMidfielder,
        PlayerPosition::CentralMidfielder,
        PlayerPosition::AttackingMidfielder,
        PlayerPosition::LeftWinger,
        PlayerPosition::RightWinger,
        PlayerPosition::Striker,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            PlayerPosition::Goalkeeper => "Goleiro",
            PlayerPosition::CenterBack => "Zagueiro",
            PlayerPosition::LeftBack => "Lateral Esquerdo",
            PlayerPosition::RightBack => "Lateral Direito",
            PlayerPosition::DefensiveMidfielder => "Volante",
            PlayerPosition::CentralMidfielder => "Meio-campista",
            PlayerPosition::AttackingMidfielder => "Meia Atacante",
            PlayerPosition::LeftWinger => "Ponta Esquerda",
            PlayerPosition::RightWinger => "Ponta Direita",
            PlayerPosition::Striker => "Centroavante",
        }
    }

    pub fn position_group(&self) -> PlayerFieldPositionGroup {
        match self {
            PlayerPosition::Goalkeeper => PlayerFieldPositionGroup::Goalkeeper,
            PlayerPosition::CenterBack | PlayerPosition::LeftBack | PlayerPosition::RightBack => {
                PlayerFieldPositionGroup::Defender
            }
            PlayerPosition::DefensiveMidfielder
            | PlayerPosition::CentralMidfielder
            | PlayerPosition::AttackingMidfielder => PlayerFieldPositionGroup::Midfielder,
            PlayerPosition::LeftWinger | PlayerPosition::RightWinger | PlayerPosition::Striker => {
                PlayerFieldPositionGroup::Forward
            }
        }
    }

    pub fn is_goalkeeper(&self) -> bool {
        self.position_group() == PlayerFieldPositionGroup::Goalkeeper
    }

    pub fn is_defender(&self) -> bool {
        self.position_group() == PlayerFieldPositionGroup::Defender
    }

    pub fn is_midfielder(&self) -> bool {
        self.position_group() == PlayerFieldPositionGroup::Midfielder
    }

    pub fn is_forward(&self) -> bool {
        self.position_group() == PlayerFieldPositionGroup::Forward
    }
}

impl Display for PlayerPosition {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for PlayerPosition {
    type Err = UnknownLabel;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();

        PlayerPosition::ALL
            .into_iter()
            .find(|position| position.label().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| UnknownLabel::new("position", trimmed))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PreferredFoot {
    #[serde(rename = "Destro")]
    Right,
    #[serde(rename = "Canhoto")]
    Left,
    #[serde(rename = "Ambidestro")]
    Both,
}

impl FromStr for PreferredFoot {
    type Err = UnknownLabel;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "Destro" => Ok(PreferredFoot::Right),
            "Canhoto" => Ok(PreferredFoot::Left),
            "Ambidestro" => Ok(PreferredFoot::Both),
            other => Err(UnknownLabel::new("preferred foot", other)),
        }
    }
}
