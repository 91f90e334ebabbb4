use sea_orm_migration::prelude::*;

/// Bonus templates (reusable bonus configurations, caller-supplied id)
#[derive(DeriveIden)]
enum BonusTemplates {
    Table,
    Id,
    ScheduleType,
    ScheduleFrom,
    ScheduleTo,
    TriggerType,
    TriggerIterations,
    TriggerDuration,
    TriggerName,
    TriggerDescription,
    MinimumAmount,
    Percentage,
    WageringMultiplier,
    MinimumStakeToWager,
    MaximumStakeToWager,
    MaximumAmount,
    MaximumWithdraw,
    IncludeAmountOnTargetWager,
    CapCalculationToMaximum,
    CompensateOverspending,
    WithdrawActive,
    Category,
    Provider,
    Brand,
    BonusType,
    CreatedAt,
    UpdatedAt,
}

/// Per-language/per-currency display texts for a template
#[derive(DeriveIden)]
enum BonusTranslations {
    Table,
    Id,
    TemplateId,
    Language,
    Currency,
    Name,
    Description,
    CreatedAt,
}

/// Promotional offers (generated id, conversions cached at write time)
#[derive(DeriveIden)]
enum Offers {
    Table,
    Id,
    Name,
    OfferType,
    BonusPercentage,
    MinDepositEur,
    WageringMultiplier,
    Description,
    CurrencyConversions,
    CreatedAt,
    UpdatedAt,
}

/// Per-language display texts for an offer
#[derive(DeriveIden)]
enum OfferTranslations {
    Table,
    Id,
    OfferId,
    Language,
    OfferName,
    OfferDescription,
    CreatedAt,
}

/// User-defined language codes beyond the built-in list
#[derive(DeriveIden)]
enum CustomLanguages {
    Table,
    Id,
    Code,
    Name,
    CreatedAt,
}

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(BonusTemplates::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(BonusTemplates::Id)
                            .string_len(255)
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(BonusTemplates::ScheduleType).string_len(64).null())
                    .col(ColumnDef::new(BonusTemplates::ScheduleFrom).string_len(64).null())
                    .col(ColumnDef::new(BonusTemplates::ScheduleTo).string_len(64).null())
                    .col(ColumnDef::new(BonusTemplates::TriggerType).string_len(64).null())
                    .col(ColumnDef::new(BonusTemplates::TriggerIterations).integer().null())
                    .col(ColumnDef::new(BonusTemplates::TriggerDuration).big_integer().null())
                    .col(ColumnDef::new(BonusTemplates::TriggerName).json_binary().null())
                    .col(ColumnDef::new(BonusTemplates::TriggerDescription).json_binary().null())
                    .col(ColumnDef::new(BonusTemplates::MinimumAmount).json_binary().null())
                    .col(ColumnDef::new(BonusTemplates::Percentage).double().null())
                    .col(ColumnDef::new(BonusTemplates::WageringMultiplier).double().null())
                    .col(ColumnDef::new(BonusTemplates::MinimumStakeToWager).json_binary().null())
                    .col(ColumnDef::new(BonusTemplates::MaximumStakeToWager).json_binary().null())
                    .col(ColumnDef::new(BonusTemplates::MaximumAmount).json_binary().null())
                    .col(ColumnDef::new(BonusTemplates::MaximumWithdraw).json_binary().null())
                    .col(ColumnDef::new(BonusTemplates::IncludeAmountOnTargetWager).boolean().null())
                    .col(ColumnDef::new(BonusTemplates::CapCalculationToMaximum).boolean().null())
                    .col(ColumnDef::new(BonusTemplates::CompensateOverspending).boolean().null())
                    .col(ColumnDef::new(BonusTemplates::WithdrawActive).boolean().null())
                    .col(ColumnDef::new(BonusTemplates::Category).string_len(255).null())
                    .col(ColumnDef::new(BonusTemplates::Provider).string_len(255).null())
                    .col(ColumnDef::new(BonusTemplates::Brand).string_len(255).null())
                    .col(ColumnDef::new(BonusTemplates::BonusType).string_len(64).null())
                    .col(
                        ColumnDef::new(BonusTemplates::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::cust("NOW()")),
                    )
                    .col(
                        ColumnDef::new(BonusTemplates::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::cust("NOW()")),
                    )
                    .to_owned(),
            )
            .await?;

        // search filters on created_at windows
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_bonus_templates_created_at")
                    .table(BonusTemplates::Table)
                    .col(BonusTemplates::CreatedAt)
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(BonusTranslations::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(BonusTranslations::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(BonusTranslations::TemplateId)
                            .string_len(255)
                            .not_null(),
                    )
                    .col(ColumnDef::new(BonusTranslations::Language).string_len(32).not_null())
                    .col(ColumnDef::new(BonusTranslations::Currency).string_len(16).null())
                    .col(ColumnDef::new(BonusTranslations::Name).text().null())
                    .col(ColumnDef::new(BonusTranslations::Description).text().null())
                    .col(
                        ColumnDef::new(BonusTranslations::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::cust("NOW()")),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_bonus_translations_template")
                            .from(BonusTranslations::Table, BonusTranslations::TemplateId)
                            .to(BonusTemplates::Table, BonusTemplates::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // one translation row per language per template (upsert target)
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_bonus_translations_template_language_unique")
                    .table(BonusTranslations::Table)
                    .col(BonusTranslations::TemplateId)
                    .col(BonusTranslations::Language)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Offers::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Offers::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Offers::Name).string_len(255).not_null())
                    .col(ColumnDef::new(Offers::OfferType).string_len(64).null())
                    .col(ColumnDef::new(Offers::BonusPercentage).double().null())
                    .col(ColumnDef::new(Offers::MinDepositEur).double().not_null())
                    .col(ColumnDef::new(Offers::WageringMultiplier).double().null())
                    .col(ColumnDef::new(Offers::Description).text().null())
                    .col(ColumnDef::new(Offers::CurrencyConversions).json_binary().null())
                    .col(
                        ColumnDef::new(Offers::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::cust("NOW()")),
                    )
                    .col(
                        ColumnDef::new(Offers::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::cust("NOW()")),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(OfferTranslations::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(OfferTranslations::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(OfferTranslations::OfferId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(OfferTranslations::Language).string_len(32).not_null())
                    .col(ColumnDef::new(OfferTranslations::OfferName).text().null())
                    .col(ColumnDef::new(OfferTranslations::OfferDescription).text().null())
                    .col(
                        ColumnDef::new(OfferTranslations::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::cust("NOW()")),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_offer_translations_offer")
                            .from(OfferTranslations::Table, OfferTranslations::OfferId)
                            .to(Offers::Table, Offers::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_offer_translations_offer")
                    .table(OfferTranslations::Table)
                    .col(OfferTranslations::OfferId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(CustomLanguages::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(CustomLanguages::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(CustomLanguages::Code).string_len(32).not_null())
                    .col(ColumnDef::new(CustomLanguages::Name).string_len(255).not_null())
                    .col(
                        ColumnDef::new(CustomLanguages::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::cust("NOW()")),
                    )
                    .to_owned(),
            )
            .await?;

        // codes are stored lower-cased and must be unique
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_custom_languages_code_unique")
                    .table(CustomLanguages::Table)
                    .col(CustomLanguages::Code)
                    .unique()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // drop order: children first
        manager
            .drop_table(
                Table::drop()
                    .if_exists()
                    .table(BonusTranslations::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(
                Table::drop()
                    .if_exists()
                    .table(OfferTranslations::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().if_exists().table(BonusTemplates::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().if_exists().table(Offers::Table).to_owned())
            .await?;

        manager
            .drop_table(
                Table::drop()
                    .if_exists()
                    .table(CustomLanguages::Table)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }
}
