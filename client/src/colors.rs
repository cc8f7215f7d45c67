use eframe::egui;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoardColors {
    pub background: egui::Color32,
    pub grid: egui::Color32,
    pub x_mark: egui::Color32,
    pub o_mark: egui::Color32,
    pub hover: egui::Color32,
    pub winning_cell: egui::Color32,
}

pub fn board_colors(dark_mode: bool) -> BoardColors {
    if dark_mode {
        BoardColors {
            background: egui::Color32::from_rgb(34, 38, 46),
            grid: egui::Color32::from_rgb(200, 200, 210),
            x_mark: egui::Color32::from_rgb(255, 110, 110),
            o_mark: egui::Color32::from_rgb(120, 170, 255),
            hover: egui::Color32::from_rgba_unmultiplied(120, 170, 255, 40),
            winning_cell: egui::Color32::from_rgba_unmultiplied(90, 200, 120, 70),
        }
    } else {
        BoardColors {
            background: egui::Color32::from_rgb(240, 240, 240),
            grid: egui::Color32::BLACK,
            x_mark: egui::Color32::from_rgb(220, 50, 50),
            o_mark: egui::Color32::from_rgb(50, 50, 220),
            hover: egui::Color32::from_rgba_unmultiplied(100, 150, 255, 50),
            winning_cell: egui::Color32::from_rgba_unmultiplied(60, 180, 90, 70),
        }
    }
}

pub fn visuals(dark_mode: bool) -> egui::Visuals {
    if dark_mode {
        egui::Visuals::dark()
    } else {
        egui::Visuals::light()
    }
}
