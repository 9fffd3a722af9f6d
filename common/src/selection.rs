//! 詳細ダイアログの選択状態

use crate::catalog::Organism;

/// 選択中の微生物とダイアログの開閉
///
/// 閉じても選択は解除しない（次に開くまで保持される）。
/// `open == true` かつ選択なし、という状態は公開操作からは作られない。
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DialogState {
    selected: Option<&'static Organism>,
    open: bool,
}

impl DialogState {
    /// カードクリック: 選択して開く（同じカードを再度クリックしても変化なし）
    pub fn select(&mut self, organism: &'static Organism) {
        self.selected = Some(organism);
        self.open = true;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn selected(&self) -> Option<&'static Organism> {
        self.selected
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// 表示対象。開いていて選択がある場合のみ
    pub fn visible_target(&self) -> Option<&'static Organism> {
        self.selected.filter(|_| self.open)
    }
}
