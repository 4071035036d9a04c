use super::state::{Tab, QUESTION_COUNTS};
use super::DashboardApp;
use crate::analytics::ProgressSnapshot;
use crate::pipeline::{
    AssessmentKind, AssessmentStatus, Difficulty, DocumentStatus, SUPPORTED_EXTENSIONS,
};
use crate::recommendations::{self, Priority};
use crate::theme;
use crate::utils::format::format_file_size;
use eframe::egui::{self, Align, Color32, Layout, ProgressBar, RichText};
use rfd::FileDialog;
use std::path::PathBuf;
use tracing::debug;

impl DashboardApp {
    pub(crate) fn render(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("header").show(ctx, |ui| self.render_header(ui));
        egui::TopBottomPanel::top("tab_bar").show(ctx, |ui| self.render_tab_bar(ui));
        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                ui.add_space(8.0);
                match self.active_tab {
                    Tab::Overview => self.render_overview(ui),
                    Tab::Documents => self.render_documents(ui, ctx),
                    Tab::Assessments => self.render_assessments(ui),
                    Tab::Recommendations => self.render_recommendations(ui),
                }
                ui.add_space(16.0);
            });
        });

        self.toasts.render(ctx);
    }

    fn render_header(&self, ui: &mut egui::Ui) {
        ui.add_space(10.0);
        ui.horizontal(|ui| {
            ui.heading(RichText::new("Learnboard").color(theme::ACCENT));
            badge(ui, "⚡ AI-Powered Learning", theme::accent_soft(), theme::ACCENT);
        });
        ui.label(
            RichText::new(
                "Upload your documents, get AI-generated assessments, and receive \
                 personalized study recommendations based on your progress.",
            )
            .color(theme::MUTED),
        );
        ui.add_space(10.0);
    }

    fn render_tab_bar(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            for tab in Tab::ALL {
                let selected = self.active_tab == tab;
                if ui.selectable_label(selected, tab.title()).clicked() {
                    self.select_tab(tab);
                }
            }
        });
    }

    fn render_overview(&mut self, ui: &mut egui::Ui) {
        let snapshot = ProgressSnapshot::sample();

        ui.columns(4, |columns| {
            stat_card(
                &mut columns[0],
                "Study Streak",
                &snapshot.study_streak_days.to_string(),
                "days",
                theme::SUCCESS,
                "🎯",
            );
            stat_card(
                &mut columns[1],
                "Average Score",
                &format!("{}%", snapshot.avg_score),
                snapshot.improvement,
                theme::ACCENT,
                "📈",
            );
            stat_card(
                &mut columns[2],
                "Study Time",
                snapshot.study_time,
                "this week",
                theme::WARNING,
                "🕒",
            );
            stat_card(
                &mut columns[3],
                "Topics",
                &format!("{}/{}", snapshot.completed_topics, snapshot.total_topics),
                "completed",
                theme::INFO,
                "📖",
            );
        });

        ui.add_space(8.0);
        ui.columns(2, |columns| {
            weekly_progress_card(&mut columns[0], &snapshot);
            topic_completion_card(&mut columns[1], &snapshot);
        });

        ui.add_space(8.0);
        self.render_recommendations(ui);

        ui.add_space(8.0);
        ui.group(|ui| {
            ui.heading("Quick Actions");
            ui.add_space(4.0);
            let mut jump: Option<Tab> = None;
            ui.columns(3, |columns| {
                if let Some(tab) = quick_action(
                    &mut columns[0],
                    "⬆ Upload Documents",
                    "Process learning materials",
                    Tab::Documents,
                ) {
                    jump = Some(tab);
                }
                if let Some(tab) = quick_action(
                    &mut columns[1],
                    "📋 Generate Assessment",
                    "Create AI-powered tests",
                    Tab::Assessments,
                ) {
                    jump = Some(tab);
                }
                if let Some(tab) = quick_action(
                    &mut columns[2],
                    "🧠 Get Recommendations",
                    "AI study suggestions",
                    Tab::Recommendations,
                ) {
                    jump = Some(tab);
                }
            });
            if let Some(tab) = jump {
                self.select_tab(tab);
            }
        });
    }

    fn render_documents(&mut self, ui: &mut egui::Ui, ctx: &egui::Context) {
        let hovering = ctx.input(|i| !i.raw.hovered_files.is_empty());
        let stroke = if hovering {
            egui::Stroke::new(2.0, theme::ACCENT)
        } else {
            ui.visuals().widgets.noninteractive.bg_stroke
        };

        egui::Frame::none()
            .stroke(stroke)
            .rounding(egui::Rounding::same(8.0))
            .inner_margin(egui::Margin::same(24.0))
            .show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    ui.label(RichText::new("⬆").size(32.0).color(theme::ACCENT));
                    ui.heading("Upload Learning Materials");
                    ui.label(
                        RichText::new("Drag and drop your documents here, or click to browse")
                            .color(theme::MUTED),
                    );
                    ui.label(
                        RichText::new("Supports PDF, DOC, DOCX, TXT files")
                            .small()
                            .color(theme::MUTED),
                    );
                    ui.add_space(8.0);
                    if ui.button("Choose Files").clicked() {
                        if let Some(paths) = FileDialog::new()
                            .add_filter("Documents", &SUPPORTED_EXTENSIONS)
                            .pick_files()
                        {
                            self.ingest_paths(&paths);
                        }
                    }
                });
            });

        let dropped: Vec<PathBuf> = ctx.input(|i| {
            i.raw
                .dropped_files
                .iter()
                .filter_map(|file| file.path.clone())
                .collect()
        });
        if !dropped.is_empty() {
            self.ingest_paths(&dropped);
        }

        if !self.documents.is_empty() {
            ui.add_space(12.0);
            ui.group(|ui| {
                ui.heading("Processing Files");
                ui.add_space(4.0);
                for document in self.documents.iter() {
                    ui.horizontal(|ui| {
                        ui.colored_label(theme::ACCENT, "📄");
                        ui.vertical(|ui| {
                            ui.label(RichText::new(&document.name).strong());
                            ui.label(
                                RichText::new(format!(
                                    "{} • {}",
                                    format_file_size(document.size),
                                    document.status.label()
                                ))
                                .small()
                                .color(theme::MUTED),
                            );
                        });
                        ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                            document_status_icon(ui, document.status);
                        });
                    });
                    ui.add_space(4.0);
                }
            });
        }
    }

    fn render_assessments(&mut self, ui: &mut egui::Ui) {
        ui.group(|ui| {
            ui.horizontal(|ui| {
                ui.colored_label(theme::ACCENT, "⚡");
                ui.heading("AI Assessment Generator");
            });
            ui.add_space(8.0);

            ui.label(RichText::new("Topic/Subject").small());
            ui.add(
                egui::TextEdit::multiline(&mut self.form.topic)
                    .desired_rows(2)
                    .desired_width(f32::INFINITY)
                    .hint_text("e.g., Machine Learning Algorithms, Data Structures..."),
            );
            ui.add_space(8.0);

            ui.horizontal(|ui| {
                ui.vertical(|ui| {
                    ui.label(RichText::new("Assessment Type").small());
                    egui::ComboBox::from_id_source("assessment_kind")
                        .selected_text(self.form.kind.map_or("Select type", |kind| kind.label()))
                        .show_ui(ui, |ui| {
                            for kind in AssessmentKind::ALL {
                                ui.selectable_value(&mut self.form.kind, Some(kind), kind.label());
                            }
                        });
                });
                ui.vertical(|ui| {
                    ui.label(RichText::new("Difficulty").small());
                    egui::ComboBox::from_id_source("assessment_difficulty")
                        .selected_text(
                            self.form
                                .difficulty
                                .map_or("Level", |difficulty| difficulty.label()),
                        )
                        .show_ui(ui, |ui| {
                            for difficulty in Difficulty::ALL {
                                ui.selectable_value(
                                    &mut self.form.difficulty,
                                    Some(difficulty),
                                    difficulty.label(),
                                );
                            }
                        });
                });
                ui.vertical(|ui| {
                    ui.label(RichText::new("Questions").small());
                    let selected = match self.form.question_count {
                        Some(count) => format!("{} Questions", count),
                        None => "Count".to_string(),
                    };
                    egui::ComboBox::from_id_source("assessment_questions")
                        .selected_text(selected)
                        .show_ui(ui, |ui| {
                            for count in QUESTION_COUNTS {
                                ui.selectable_value(
                                    &mut self.form.question_count,
                                    Some(count),
                                    format!("{} Questions", count),
                                );
                            }
                        });
                });
            });
            ui.add_space(12.0);

            ui.add_enabled_ui(!self.is_generating, |ui| {
                let label = if self.is_generating {
                    "Generating Assessment..."
                } else {
                    "⚡ Generate Assessment"
                };
                let button =
                    egui::Button::new(label).min_size(egui::vec2(ui.available_width(), 36.0));
                if ui.add(button).clicked() {
                    self.generate_assessment();
                }
            });
        });

        if !self.assessments.is_empty() {
            ui.add_space(12.0);
            let mut started: Vec<String> = Vec::new();
            ui.group(|ui| {
                ui.heading("Generated Assessments");
                ui.add_space(4.0);
                for assessment in self.assessments.iter() {
                    ui.horizontal(|ui| {
                        assessment_status_icon(ui, assessment.status);
                        ui.vertical(|ui| {
                            ui.label(RichText::new(&assessment.title).strong());
                            ui.horizontal(|ui| {
                                outline_badge(ui, assessment.kind.label());
                                badge(
                                    ui,
                                    assessment.difficulty.label(),
                                    difficulty_color(assessment.difficulty),
                                    Color32::WHITE,
                                );
                                ui.label(
                                    RichText::new(format!(
                                        "{} questions",
                                        assessment.question_count
                                    ))
                                    .small()
                                    .color(theme::MUTED),
                                );
                                ui.label(
                                    RichText::new(
                                        assessment.created_at.format("%b %e, %H:%M").to_string(),
                                    )
                                    .small()
                                    .color(theme::MUTED),
                                );
                            });
                        });
                        ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                            if assessment.status == AssessmentStatus::Ready
                                && ui.button("Start Assessment").clicked()
                            {
                                started.push(assessment.id.clone());
                            }
                        });
                    });
                    ui.add_space(6.0);
                }
            });
            for id in started {
                self.start_assessment(&id);
            }
        }
    }

    fn render_recommendations(&mut self, ui: &mut egui::Ui) {
        ui.group(|ui| {
            ui.horizontal(|ui| {
                ui.heading("AI Study Recommendations");
                ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                    badge(ui, "🧠 AI Powered", theme::accent_soft(), theme::ACCENT);
                });
            });
            ui.add_space(4.0);

            for rec in recommendations::study_recommendations() {
                ui.group(|ui| {
                    ui.horizontal(|ui| {
                        ui.label(RichText::new(rec.kind.icon()).size(18.0));
                        ui.vertical(|ui| {
                            ui.label(RichText::new(rec.title).strong());
                            ui.label(RichText::new(rec.reason).small().color(theme::MUTED));
                        });
                        ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                            badge(
                                ui,
                                rec.priority.label(),
                                priority_color(rec.priority),
                                Color32::WHITE,
                            );
                        });
                    });
                    ui.horizontal(|ui| {
                        ui.label(
                            RichText::new(format!("🕒 {}", rec.estimated_time))
                                .small()
                                .color(theme::MUTED),
                        );
                        ui.label(
                            RichText::new(format!("🧠 {}% match", rec.confidence))
                                .small()
                                .color(theme::MUTED),
                        );
                    });
                    ui.horizontal(|ui| {
                        for topic in rec.topics {
                            outline_badge(ui, topic);
                        }
                        ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                            if ui.small_button("Start ➜").clicked() {
                                debug!(title = rec.title, "recommendation started");
                            }
                        });
                    });
                });
                ui.add_space(6.0);
            }

            ui.separator();
            ui.horizontal(|ui| {
                ui.label(
                    RichText::new("Recommendations update based on your progress")
                        .small()
                        .color(theme::MUTED),
                );
                if self.active_tab != Tab::Recommendations {
                    ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                        if ui.small_button("View All").clicked() {
                            self.select_tab(Tab::Recommendations);
                        }
                    });
                }
            });
        });
    }
}

fn stat_card(
    ui: &mut egui::Ui,
    label: &str,
    value: &str,
    caption: &str,
    color: Color32,
    icon: &str,
) {
    ui.group(|ui| {
        ui.horizontal(|ui| {
            ui.vertical(|ui| {
                ui.label(RichText::new(label).small().color(theme::MUTED));
                ui.label(RichText::new(value).size(22.0).strong().color(color));
                ui.label(RichText::new(caption).small().color(theme::MUTED));
            });
            ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                ui.label(RichText::new(icon).size(24.0));
            });
        });
    });
}

fn weekly_progress_card(ui: &mut egui::Ui, snapshot: &ProgressSnapshot) {
    ui.group(|ui| {
        ui.heading("Weekly Progress");
        ui.add_space(4.0);
        ui.horizontal(|ui| {
            ui.label("Progress to Goal");
            ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                ui.label(format!(
                    "{}% of {}%",
                    snapshot.weekly_progress, snapshot.weekly_goal
                ));
            });
        });
        ui.add(ProgressBar::new(snapshot.goal_fraction()).fill(theme::ACCENT));
        ui.label(
            RichText::new(format!(
                "You're {}% away from your weekly goal!",
                snapshot.remaining_to_goal()
            ))
            .small()
            .color(theme::MUTED),
        );
    });
}

fn topic_completion_card(ui: &mut egui::Ui, snapshot: &ProgressSnapshot) {
    ui.group(|ui| {
        ui.heading("Topic Completion");
        ui.add_space(4.0);
        ui.horizontal(|ui| {
            ui.label("Completed Topics");
            ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                ui.label(format!(
                    "{} of {}",
                    snapshot.completed_topics, snapshot.total_topics
                ));
            });
        });
        ui.add(ProgressBar::new(snapshot.topic_fraction()).fill(theme::ACCENT));
        ui.label(
            RichText::new(format!("{} topics remaining", snapshot.remaining_topics()))
                .small()
                .color(theme::MUTED),
        );
    });
}

fn quick_action(ui: &mut egui::Ui, label: &str, caption: &str, tab: Tab) -> Option<Tab> {
    let mut clicked = None;
    ui.vertical_centered(|ui| {
        let button = egui::Button::new(label).min_size(egui::vec2(ui.available_width(), 48.0));
        if ui.add(button).clicked() {
            clicked = Some(tab);
        }
        ui.label(RichText::new(caption).small().color(theme::MUTED));
    });
    clicked
}

fn badge(ui: &mut egui::Ui, text: &str, fill: Color32, text_color: Color32) {
    egui::Frame::none()
        .fill(fill)
        .rounding(egui::Rounding::same(8.0))
        .inner_margin(egui::Margin::symmetric(6.0, 2.0))
        .show(ui, |ui| {
            ui.label(RichText::new(text).small().color(text_color));
        });
}

fn outline_badge(ui: &mut egui::Ui, text: &str) {
    egui::Frame::none()
        .stroke(egui::Stroke::new(1.0, theme::MUTED))
        .rounding(egui::Rounding::same(8.0))
        .inner_margin(egui::Margin::symmetric(6.0, 2.0))
        .show(ui, |ui| {
            ui.label(RichText::new(text).small());
        });
}

fn difficulty_color(difficulty: Difficulty) -> Color32 {
    match difficulty {
        Difficulty::Easy => theme::SUCCESS,
        Difficulty::Medium => theme::WARNING,
        Difficulty::Hard => theme::DESTRUCTIVE,
    }
}

fn priority_color(priority: Priority) -> Color32 {
    match priority {
        Priority::High => theme::DESTRUCTIVE,
        Priority::Medium => theme::WARNING,
        Priority::Low => theme::SUCCESS,
    }
}

fn document_status_icon(ui: &mut egui::Ui, status: DocumentStatus) {
    if !status.is_terminal() {
        ui.add(egui::Spinner::new().size(14.0));
        return;
    }
    if status == DocumentStatus::Error {
        ui.colored_label(theme::DESTRUCTIVE, "❌");
    } else {
        ui.colored_label(theme::SUCCESS, "✅");
    }
}

fn assessment_status_icon(ui: &mut egui::Ui, status: AssessmentStatus) {
    match status {
        AssessmentStatus::Ready => {
            ui.colored_label(theme::SUCCESS, "✅");
        }
        AssessmentStatus::Completed => {
            ui.colored_label(theme::MUTED, "📋");
        }
        AssessmentStatus::Generating => {
            ui.add(egui::Spinner::new().size(14.0));
        }
    }
}
